use std::env;
use chrono::NaiveDate;
use chrono_tz::Tz;
use tracing::warn;

#[derive(Clone)]
pub struct Config {
    pub database_url: String,
    pub port: u16,
    pub timezone: Tz, // "today" for past-date checks and the booking window
}

impl Config {
    pub fn from_env() -> Self {
        let port = match env::var("PORT") {
            Ok(raw) => raw.parse().unwrap_or_else(|_| {
                warn!("PORT '{}' is not a number, using 3000", raw);
                3000
            }),
            Err(_) => 3000,
        };

        let timezone = match env::var("BUSINESS_TIMEZONE") {
            Ok(raw) => raw.parse::<Tz>().unwrap_or_else(|_| {
                warn!("BUSINESS_TIMEZONE '{}' is not a valid IANA zone, using UTC", raw);
                chrono_tz::UTC
            }),
            Err(_) => chrono_tz::UTC,
        };

        Self {
            database_url: env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite://movers-booking.db".to_string()),
            port,
            timezone,
        }
    }

    pub fn today(&self) -> NaiveDate {
        chrono::Utc::now().with_timezone(&self.timezone).date_naive()
    }
}
