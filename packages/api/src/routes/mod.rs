//! One method per backend route, grouped by concern.

mod assistant;
mod auth;
mod catalog;
mod circulation;
mod users;
