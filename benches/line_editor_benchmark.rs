//! Line editor benchmark: cursor arithmetic and screen composition.
//!
//! Target: every keystroke well under a frame, even on long lines.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use txtmanip::editor::{display_width, Cursor, LineEditor};
use txtmanip::terminal::{screen, Grid, View};

const MIXED: &str = "grep -e 'foo' 日本語のテキスト | sed s/a/b/ ";

fn cursor_walk(c: &mut Criterion) {
    let text = MIXED.repeat(8);

    c.bench_function("cursor_walk_forward_back", |b| {
        b.iter(|| {
            let mut cursor = Cursor::new(10);
            while cursor.step_forward(black_box(&text)) {}
            while cursor.step_backward(black_box(&text)) {}
            cursor
        })
    });
}

fn typing(c: &mut Criterion) {
    c.bench_function("line_editor_type_ascii", |b| {
        b.iter(|| {
            let mut editor = LineEditor::new("txtmanip> ");
            for ch in black_box("sed -e 's/alpha/beta/g'").chars() {
                editor.type_char(ch);
            }
            editor
        })
    });

    c.bench_function("line_editor_type_cjk_mid_line", |b| {
        b.iter(|| {
            let mut editor = LineEditor::new("txtmanip> ");
            for ch in "grep ".chars() {
                editor.type_char(ch);
            }
            editor.move_to_start();
            for ch in black_box("日本語テキスト").chars() {
                editor.type_char(ch);
            }
            editor
        })
    });
}

fn width(c: &mut Criterion) {
    let text = MIXED.repeat(16);
    c.bench_function("display_width_mixed", |b| {
        b.iter(|| display_width(black_box(&text)))
    });
}

fn compose_screen(c: &mut Criterion) {
    let text = "line of text with\ttabs and 日本語\n".repeat(200);
    let view = View {
        prompt: "txtmanip> ",
        input: "grep foo",
        cursor_column: 18,
        error: Some("sed: -e expression #1, char 3: unterminated `s' command"),
        text: text.as_bytes(),
    };
    let mut grid = Grid::new(120, 40);

    c.bench_function("compose_120x40", |b| {
        b.iter(|| screen::compose(&mut grid, black_box(&view)))
    });
}

criterion_group!(benches, cursor_walk, typing, width, compose_screen);
criterion_main!(benches);
