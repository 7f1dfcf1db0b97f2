pub mod about;
pub mod landing;
