//! Benchmarks for the per-keystroke paths
//!
//! Every key press during a session goes through a table lookup and, for
//! directional keys, a bisection. Override parsing runs at startup and on
//! every reload.
//!
//! Run with: cargo bench hot_paths

use quadnav::keymap::{
    default_bindings_text, parse_bindings, KeyBindingTable, KeyCode, Keystroke, Modifiers,
};
use quadnav::model::{Direction, Rect, SelectionState, DEFAULT_NUDGE_FRACTION};
use quadnav::monitor::find_in_direction;

#[global_allocator]
static ALLOC: divan::AllocProfiler = divan::AllocProfiler::system();

fn main() {
    divan::main();
}

fn screen() -> Rect {
    Rect::new(0.0, 0.0, 3840.0, 2160.0)
}

// ============================================================================
// Table lookup
// ============================================================================

#[divan::bench]
fn resolve_bound_key(bencher: divan::Bencher) {
    let table = KeyBindingTable::with_defaults();
    let key = Keystroke::new(KeyCode::Char('l'), Modifiers::CONTROL | Modifiers::SHIFT);

    bencher.bench_local(|| {
        divan::black_box(table.resolve(divan::black_box(&key)));
    });
}

#[divan::bench]
fn resolve_unbound_key(bencher: divan::Bencher) {
    let table = KeyBindingTable::with_defaults();
    let key = Keystroke::new(KeyCode::Char('z'), Modifiers::COMMAND);

    bencher.bench_local(|| {
        divan::black_box(table.resolve(divan::black_box(&key)));
    });
}

// ============================================================================
// Override parsing
// ============================================================================

#[divan::bench]
fn parse_default_table_text(bencher: divan::Bencher) {
    let text = default_bindings_text();

    bencher.bench_local(|| {
        divan::black_box(parse_bindings(divan::black_box(&text)));
    });
}

#[divan::bench(args = [10, 100, 1000])]
fn build_table_with_overrides(bencher: divan::Bencher, lines: usize) {
    let keys = ["h", "j", "k", "l", "ctrl+a", "shift+return", "f13", "alt+x"];
    let actions = ["left", "down", "up", "right", "monitor-left", "warp,click-2", "start"];
    let text: String = (0..lines)
        .map(|i| format!("{} {}\n", keys[i % keys.len()], actions[i % actions.len()]))
        .collect();

    bencher.bench_local(|| {
        divan::black_box(KeyBindingTable::build(Some(divan::black_box(&text))));
    });
}

// ============================================================================
// Selection
// ============================================================================

#[divan::bench(args = [4, 16, 64])]
fn bisect_chain(bencher: divan::Bencher, depth: usize) {
    bencher.bench_local(|| {
        let mut sel = SelectionState::new(screen()).unwrap();
        for i in 0..depth {
            let _ = sel.bisect(Direction::ALL[i % 4]);
        }
        divan::black_box(sel.current());
    });
}

#[divan::bench]
fn nudge_against_edge(bencher: divan::Bencher) {
    let mut sel = SelectionState::new(screen()).unwrap();
    sel.bisect(Direction::Left).unwrap();

    bencher.bench_local(|| {
        sel.nudge(divan::black_box(Direction::Left), DEFAULT_NUDGE_FRACTION);
        divan::black_box(sel.current());
    });
}

// ============================================================================
// Monitor lookup
// ============================================================================

#[divan::bench(args = [2, 4, 8])]
fn find_monitor_in_row(bencher: divan::Bencher, count: usize) {
    let frames: Vec<Rect> = (0..count)
        .map(|i| Rect::new(i as f64 * 1920.0, 0.0, 1920.0, 1080.0))
        .collect();

    bencher.bench_local(|| {
        divan::black_box(find_in_direction(
            Direction::Right,
            divan::black_box(&frames[0]),
            &frames,
        ));
    });
}
