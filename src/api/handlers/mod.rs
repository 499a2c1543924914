pub mod booking;
pub mod confirmation_email;
pub mod health;
pub mod landing;
