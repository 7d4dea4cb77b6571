use chrono::NaiveDate;
use clap::Parser;

use crate::{domain::calendar::parse_date, utils::version};

#[derive(Parser, Debug)]
#[command(author, version = version(), about)]
pub struct Cli {
    #[arg(
        short,
        long,
        value_name = "FLOAT",
        help = "Tick rate, i.e. number of ticks per second",
        default_value_t = 4.0,
        value_parser = parse_rate
    )]
    pub tick_rate: f64,

    #[arg(
        short,
        long,
        value_name = "FLOAT",
        help = "Frame rate, i.e. number of frames per second",
        default_value_t = 30.0,
        value_parser = parse_rate
    )]
    pub frame_rate: f64,

    #[arg(
        short,
        long,
        value_name = "YYYY-MM-DD",
        help = "Date the couple got together (overrides the config file)",
        value_parser = parse_start_date
    )]
    pub start_date: Option<NaiveDate>,
}

fn parse_start_date(raw: &str) -> Result<NaiveDate, String> {
    parse_date(raw).map_err(|e| e.to_string())
}

/// Rates become `1 / rate` second intervals, so they must be finite and positive.
fn parse_rate(raw: &str) -> Result<f64, String> {
    let rate: f64 = raw
        .trim()
        .parse()
        .map_err(|e| format!("invalid rate '{raw}': {e}"))?;
    if rate.is_finite() && rate > 0.0 {
        Ok(rate)
    } else {
        Err(format!("rate must be a positive number, got '{raw}'"))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::*;

    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["lovai"]);
        assert_eq!(cli.tick_rate, 4.0);
        assert_eq!(cli.frame_rate, 30.0);
        assert_eq!(cli.start_date, None);
    }

    #[test]
    fn test_start_date() {
        let cli = Cli::parse_from(["lovai", "--start-date", "2022-06-15"]);
        assert_eq!(cli.start_date, NaiveDate::from_ymd_opt(2022, 6, 15));
    }

    #[test]
    fn test_rates() {
        let cli = Cli::parse_from(["lovai", "--tick-rate", "0.5", "--frame-rate", "60"]);
        assert_eq!(cli.tick_rate, 0.5);
        assert_eq!(cli.frame_rate, 60.0);
    }

    #[rstest]
    #[case("0")]
    #[case("-1")]
    #[case("NaN")]
    #[case("inf")]
    #[case("fast")]
    fn test_invalid_rates_are_rejected(#[case] rate: &str) {
        assert!(Cli::try_parse_from(["lovai", "--tick-rate", rate]).is_err());
        assert!(Cli::try_parse_from(["lovai", "--frame-rate", rate]).is_err());
    }

    #[test]
    fn test_invalid_start_date_is_rejected() {
        let result = Cli::try_parse_from(["lovai", "--start-date", "2022-13-40"]);
        assert!(result.is_err());
    }
}
