//! Small styled primitives shared by the views.

mod button;
mod card;
mod input;

pub use button::{Button, ButtonVariant};
pub use card::{Card, CardContent, CardDescription, CardHeader, CardTitle};
pub use input::{Input, Label};

use dioxus::prelude::*;

pub(crate) const COMPONENTS_CSS: Asset = asset!("/src/components/components.css");
