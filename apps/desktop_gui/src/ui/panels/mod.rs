pub mod architecture;
pub mod cases;
pub mod contact;
pub mod home;
