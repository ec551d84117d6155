// Example: drive the controller with a scripted stream of host events.
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use slidedeck::{InputEvent, Key, MemoryViewport, SlideController, SlideControllerOptions};

fn dump(c: &SlideController<MemoryViewport>, now_ms: u64) {
    let slides: Vec<String> = (0..c.slide_count())
        .map(|i| format!("{:?}", c.slide_classes(i)))
        .collect();
    println!(
        "t={now_ms}ms active={} frozen={} slides=[{}]",
        c.active_index(),
        c.is_frozen(),
        slides.join(", ")
    );
}

fn main() {
    let leaves = Arc::new(AtomicUsize::new(0));
    let opts = SlideControllerOptions::new()
        .with_freeze_time_ms(600)
        .with_on_change_slide(Some(|i| println!("  -> change to slide {i}")))
        .with_on_leave(Some({
            let leaves = Arc::clone(&leaves);
            move || {
                leaves.fetch_add(1, Ordering::Relaxed);
            }
        }));

    let mut c = SlideController::new(4, opts, MemoryViewport::new()).expect("non-empty deck");
    c.initialize();
    dump(&c, 0);

    // A 60fps host: feed input at scripted times and tick once per frame.
    let mut now_ms = 0u64;
    while now_ms <= 4_000 {
        match now_ms {
            96 => c.handle_wheel(&mut InputEvent::wheel(120.0), now_ms),
            304 => c.handle_wheel(&mut InputEvent::wheel(120.0), now_ms), // frozen, ignored
            800 => c.handle_key(&mut InputEvent::key(Key::ArrowDown), now_ms),
            1504 => {
                c.click_dot(3, now_ms);
            }
            2400 => c.handle_touch_end(&mut InputEvent::bare(), now_ms),
            _ => {}
        }
        if c.tick(now_ms) > 0 {
            dump(&c, now_ms);
        }
        now_ms += 16;
    }

    println!(
        "done: {:?} leaves={}",
        c.state(),
        leaves.load(Ordering::Relaxed)
    );
}
