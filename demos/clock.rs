//! A day clock assembled from four independent digits.
//!
//! RUST_LOG=trace shows every wrap and carry as it happens.
use carry_digit::{Digit, DigitError};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), DigitError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let days = Digit::unbounded(0);
    let hours = Digit::from_range_at(0..=23, 23)?;
    let minutes = Digit::from_range_at(0..=59, 59)?;
    let seconds = Digit::from_range_at(0..=59, 58)?;
    seconds.link(&minutes);
    minutes.link(&hours);
    hours.link(&days);

    let show = || {
        println!(
            "day {} {:02}:{:02}:{:02}",
            days.value(),
            hours.value(),
            minutes.value(),
            seconds.value()
        )
    };

    show();
    for _ in 0..3 {
        seconds.increment();
        show();
    }

    // skip ahead an hour and a half in one go
    seconds.add_value(90 * 60);
    show();

    for _ in 0..3 {
        seconds.decrement();
        show();
    }
    println!("{seconds}");
    Ok(())
}
