//! Shared building blocks used across the web views.

mod book_card;
pub use book_card::BookCard;

mod book_carousel;
pub use book_carousel::BookCarousel;

mod chatbot;
pub use chatbot::Chatbot;

mod feature_card;
pub use feature_card::{FeatureCard, FeatureGrid};

mod footer;
pub use footer::Footer;

mod spinner;
pub use spinner::{Spinner, SpinnerPage};
