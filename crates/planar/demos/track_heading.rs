//! Track a heading that wraps around ±π and report the net rotation.
//!
//! Run with: cargo run -p planar --example track_heading --features tracing

use planar::prelude::*;
use tracing_subscriber::fmt::SubscriberBuilder;

fn main() {
    SubscriberBuilder::default()
        .with_target(false)
        .with_max_level(tracing::Level::TRACE)
        .init();

    // Headings as atan2 reports them: the jump from 3.0 to -3.0 crosses the seam.
    let headings = [0.0, 1.5, 3.0, -3.0, -1.5, 0.0].map(Radian::new);

    let mut unfolded = headings[0];
    let mut total = Rotation::None;
    for pair in headings.windows(2) {
        let step = Radian::shortest_angle(pair[0], pair[1]);
        let next = unfolded + step;
        total = total.accumulate(unfolded, next);
        unfolded = next;
        tracing::info!(heading = %pair[1], step = %step, "sample");
    }

    tracing::info!(
        raw = ?Rotation::from_samples(headings),
        unfolded = ?total,
        turns = total.clockwise_rotations(),
        truncated = ?total.truncated(),
        "net rotation"
    );
}
