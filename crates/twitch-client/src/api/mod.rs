//! Twitch Helix REST API client.
//!
//! Provides typed access to the user, schedule and games endpoints.
//! Every public operation obtains its own token from the configured
//! [`TokenSource`] before injecting the Bearer and Client-Id headers.

mod games;
mod request;
mod schedule;
mod users;

pub mod models;

pub use models::{
    Category, HelixPagination, HelixResponse, ScheduleCategory, ScheduleData, ScheduleResponse,
    Segment, TwitchUser, Vacation,
};

use crate::auth::{TokenSource, TwitchAuth};
use crate::{TwitchConfig, TwitchError};

/// Maximum number of `id` parameters Helix accepts in one request.
pub const MAX_IDS_PER_REQUEST: usize = 100;

/// Twitch Helix API client with automatic auth header injection.
#[derive(Clone)]
pub struct TwitchApiClient<A = TwitchAuth> {
    http: reqwest::Client,
    client_id: String,
    base_url: String,
    auth: A,
}

#[cfg(test)]
mod tests;
