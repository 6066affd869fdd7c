mod login;
mod register;

pub use login::Login;
pub use register::Register;
