use application::clock::ClockTicker;
use std::sync::Arc;
use std::time::Duration;
use tests::RecordingPort;

#[tokio::test(start_paused = true)]
async fn ticker_pushes_time_through_the_render_port() {
    let render = Arc::new(RecordingPort::default());
    let ticker = ClockTicker::spawn(render.clone());

    // Paused time auto-advances, so three interval periods elapse.
    tokio::time::sleep(Duration::from_millis(2500)).await;
    ticker.stop();

    let updates = render.clock_updates();
    assert!(updates.len() >= 2, "expected repeated updates, got {updates:?}");
    for time in &updates {
        assert_eq!(time.len(), 8, "unexpected clock text {time:?}");
        assert_eq!(&time[2..3], ":");
        assert_eq!(&time[5..6], ":");
    }
}
