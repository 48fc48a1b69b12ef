//! Load a short series of stock prices and report the cheapest day of a few windows.
//!
//! Set `SEGMENT_INDEX_LOG=trace` to watch the index being updated.

use segment_index::prelude::*;

fn main() -> Result<()> {
    if std::env::var("SEGMENT_INDEX_LOG").is_ok() {
        let env = env_logger::Env::new()
            .filter("SEGMENT_INDEX_LOG")
            .write_style("SEGMENT_INDEX_LOG_STYLE");
        env_logger::init_from_env(env);
    }

    let prices = [31.5, 30.25, 32.0, 29.75, 33.1, 28.9];
    let mut index = SegmentIndex::<f64>::new(prices.len())?;
    for (day, &price) in prices.iter().enumerate() {
        index.update(day, price)?;
    }

    for (low, high) in [(0, 2), (1, 4), (0, 5)] {
        let cheapest = index.min_in(low..=high)?;
        println!(
            "days {low}..={high}: cheapest on day {} at {:.2}",
            cheapest.pos(),
            cheapest.val()
        );
    }

    // A late correction of the last price
    index.update(5, 35.0)?;
    let cheapest = index.argmin();
    println!(
        "after correction: cheapest on day {} at {:.2}",
        cheapest.pos(),
        cheapest.val()
    );

    Ok(())
}
