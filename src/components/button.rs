use yew::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonSize {
    #[default]
    Md,
    Lg,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonVariant {
    #[default]
    Default,
    Outline,
}

#[derive(Properties, PartialEq)]
pub struct ButtonProps {
    #[prop_or_default]
    pub children: Children,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub size: ButtonSize,
    #[prop_or_default]
    pub variant: ButtonVariant,
    #[prop_or_default]
    pub onclick: Option<Callback<MouseEvent>>,
    #[prop_or_default]
    pub disabled: bool,
}

pub fn button_classes(size: ButtonSize, variant: ButtonVariant, disabled: bool) -> Classes {
    let size = match size {
        ButtonSize::Md => "btn-md",
        ButtonSize::Lg => "btn-lg",
    };
    let variant = match variant {
        ButtonVariant::Default => "btn-default",
        ButtonVariant::Outline => "btn-outline",
    };
    classes!("btn", size, variant, disabled.then_some("btn-disabled"))
}

#[function_component(Button)]
pub fn button(props: &ButtonProps) -> Html {
    // A disabled button must not react even if the browser lets the click through.
    let onclick = if props.disabled {
        None
    } else {
        props.onclick.clone()
    };

    html! {
        <button
            class={classes!(button_classes(props.size, props.variant, props.disabled), props.class.clone())}
            disabled={props.disabled}
            onclick={onclick}
        >
            { for props.children.iter() }
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn classes_reflect_size_variant_and_state() {
        assert_eq!(
            button_classes(ButtonSize::Lg, ButtonVariant::Outline, true).to_string(),
            "btn btn-lg btn-outline btn-disabled"
        );
        assert_eq!(
            button_classes(ButtonSize::default(), ButtonVariant::default(), false).to_string(),
            "btn btn-md btn-default"
        );
    }
}
