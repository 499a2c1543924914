pub mod confirmation_email;
pub mod whatsapp;
pub mod wizard;
