mod footer_bar;
mod header_bar;
mod hospital_card;
mod input;
mod labeled_input;

pub use footer_bar::FooterBar;
pub use header_bar::HeaderBar;
pub use hospital_card::{CARD_HEIGHT, HospitalCard, HospitalCardStyle};
pub use input::{InputChange, TextInput};
pub use labeled_input::{LABELED_INPUT_HEIGHT, LabeledInput};
