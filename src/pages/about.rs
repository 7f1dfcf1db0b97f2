use yew::prelude::*;

use crate::config;

#[function_component(AboutUs)]
pub fn about_us() -> Html {
    html! {
        <section class="panel about-section">
            <div class="container">
                <h2 class="section-title">{ "About Us" }</h2>
                <div class="about-grid">
                    <div>
                        <h3>{ "Our Mission" }</h3>
                        <p>
                            { "At Remind Me, our mission is to simplify and enhance the academic \
                               experience for students worldwide. We believe that effective time \
                               management is key to academic success, and our app is designed to \
                               empower students to take control of their schedules." }
                        </p>
                        <h3>{ "Our Team" }</h3>
                        <p>
                            { "We are a dedicated team of developers, designers, and former educators \
                               who understand the challenges students face. Our diverse backgrounds \
                               and shared passion for education drive us to create innovative \
                               solutions that make a real difference in students' lives." }
                        </p>
                    </div>
                    <div>
                        <h3>{ "Contact Us" }</h3>
                        <div class="contact-list">
                            <div class="contact-item">
                                <i class="fas fa-envelope"></i>
                                <p>{ config::SUPPORT_EMAIL }</p>
                            </div>
                            <div class="contact-item">
                                <i class="fas fa-location-dot"></i>
                                <p>{ config::POSTAL_ADDRESS }</p>
                            </div>
                            <div class="contact-item">
                                <i class="fas fa-users"></i>
                                <p>{ "Join our community on social media" }</p>
                            </div>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
