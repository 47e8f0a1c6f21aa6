//! UI screens.

mod app;
mod form_state;
mod hospital_screen;
mod login_screen;
mod register_screen;
mod splash_screen;
mod utils;

pub use app::App;
pub use form_state::FormInputs;
pub use hospital_screen::{HospitalAction, HospitalFocus, HospitalScreen, HospitalScreenState};
pub use login_screen::{LoginAction, LoginScreen, LoginState};
pub use register_screen::{RegisterAction, RegisterScreen};
pub use splash_screen::{SplashAction, SplashScreen};
