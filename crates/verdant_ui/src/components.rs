//! Presentational components sharing the class-composition contract.

mod badge;
mod button;
mod card;
mod input;

pub use badge::{Badge, BadgeSize, BadgeVariant};
pub use button::{Button, ButtonSize, ButtonVariant};
pub use card::{Card, CardBody, CardFooter, CardHeader, CardPadding};
pub use input::Input;
