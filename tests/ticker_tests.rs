use rtimesince::core::ticker::Ticker;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::thread;
use std::time::Duration;

#[test]
fn test_ticker_stops_when_callback_says_so() {
    let seen = Arc::new(AtomicU64::new(0));
    let counter = Arc::clone(&seen);

    let ticker = Ticker::start(Duration::from_millis(5), move |n| {
        counter.store(n, Ordering::SeqCst);
        n < 3
    });

    assert_eq!(ticker.join(), 3);
    assert_eq!(seen.load(Ordering::SeqCst), 3);
}

#[test]
fn test_ticker_stop_halts_callbacks() {
    let seen = Arc::new(AtomicU64::new(0));
    let counter = Arc::clone(&seen);

    let ticker = Ticker::start(Duration::from_millis(5), move |_| {
        counter.fetch_add(1, Ordering::SeqCst);
        true
    });

    thread::sleep(Duration::from_millis(40));
    assert!(ticker.is_running());
    let fired = ticker.stop();

    let after_stop = seen.load(Ordering::SeqCst);
    assert_eq!(fired, after_stop);

    thread::sleep(Duration::from_millis(30));
    assert_eq!(seen.load(Ordering::SeqCst), after_stop, "no tick after stop");
}

#[test]
fn test_ticker_drop_stops_thread() {
    let seen = Arc::new(AtomicU64::new(0));
    let counter = Arc::clone(&seen);

    {
        let _ticker = Ticker::start(Duration::from_millis(5), move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
            true
        });
        thread::sleep(Duration::from_millis(20));
    }

    let after_drop = seen.load(Ordering::SeqCst);
    thread::sleep(Duration::from_millis(30));
    assert_eq!(seen.load(Ordering::SeqCst), after_drop);
}

#[test]
fn test_ticker_stopped_before_first_tick() {
    let ticker = Ticker::start(Duration::from_secs(60), |_| true);
    assert_eq!(ticker.stop(), 0);
}
