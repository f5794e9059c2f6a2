// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Turns the editor state into terminal bytes.
//!
//! A frame is assembled into one buffer and written with a single flush, so the
//! terminal never shows half a frame.

use super::ColorScheme;
use crate::{CLEAR_LINE, CRLF, CURSOR_HOME, Document, EditorError, EditorResult,
            HIDE_CURSOR, HighlightClass, OutputDevice, SGR_DEFAULT_FG, SGR_INVERSE,
            SGR_RESET, SHOW_CURSOR, SearchMatch, Viewport, char_display_width,
            cursor_position, expand_tabs, sgr};
use std::ops::Range;
use unicode_width::UnicodeWidthStr;

pub const DEBUG_RENDERER: bool = false;

/// Longest file name shown in the status bar.
pub const STATUS_FILENAME_MAX_CHARS: usize = 20;

const ELLIPSIS: &str = "...";

/// Everything a frame is drawn from.
#[derive(Debug, Clone, Copy)]
pub struct Frame<'a> {
    pub doc: &'a Document,
    pub viewport: &'a Viewport,
    /// Message bar content.
    pub message: &'a str,
    /// Drawn with [`HighlightClass::Match`] on top of the row's own classes.
    pub search_match: Option<SearchMatch>,
}

#[derive(Debug, Clone)]
pub struct Renderer {
    output_device: OutputDevice,
    color_scheme: ColorScheme,
}

impl Renderer {
    #[must_use]
    pub fn new(output_device: OutputDevice, color_scheme: ColorScheme) -> Self {
        Self {
            output_device,
            color_scheme,
        }
    }

    #[must_use]
    pub fn color_scheme(&self) -> &ColorScheme { &self.color_scheme }

    /// Redraw the whole screen.
    pub fn render_frame(&self, frame: &Frame<'_>) -> EditorResult<()> {
        let mut out = String::new();
        out.push_str(HIDE_CURSOR);
        out.push_str(CURSOR_HOME);

        for screen_row in 0..frame.viewport.screen_rows() {
            self.draw_row(&mut out, frame, screen_row);
            out.push_str(CLEAR_LINE);
            out.push_str(CRLF);
        }
        draw_status_bar(&mut out, frame);
        draw_message_bar(&mut out, frame);
        push_cursor_position(&mut out, frame.viewport);
        out.push_str(SHOW_CURSOR);

        DEBUG_RENDERER.then(|| {
            tracing::debug!(message = "render_frame", bytes = out.len());
        });

        self.flush(&out)
    }

    /// Redraw only document row `row`. A row that is scrolled out of view means the
    /// viewport moved, so the whole frame is drawn instead.
    pub fn render_row(&self, frame: &Frame<'_>, row: usize) -> EditorResult<()> {
        if !frame.viewport.is_row_visible(row) {
            return self.render_frame(frame);
        }
        let screen_row = row - frame.viewport.row_offset();

        let mut out = String::new();
        out.push_str(HIDE_CURSOR);
        self.push_screen_row(&mut out, frame, screen_row);
        push_cursor_position(&mut out, frame.viewport);
        out.push_str(SHOW_CURSOR);
        self.flush(&out)
    }

    /// Redraw the visible rows of `rows`, then the status and message bars. This is the
    /// redraw after an edit that did not scroll: rows outside the viewport are not on
    /// screen, and the bars always change with the cursor or the modified flag.
    pub fn render_rows(&self, frame: &Frame<'_>, rows: Range<usize>) -> EditorResult<()> {
        let viewport = frame.viewport;
        let first = viewport.row_offset();
        let last = first + viewport.screen_rows();

        let mut out = String::new();
        out.push_str(HIDE_CURSOR);
        for row in rows.start.max(first)..rows.end.min(last) {
            self.push_screen_row(&mut out, frame, row - first);
        }
        out.push_str(&cursor_position(viewport.screen_rows() + 1, 1));
        draw_status_bar(&mut out, frame);
        draw_message_bar(&mut out, frame);
        push_cursor_position(&mut out, viewport);
        out.push_str(SHOW_CURSOR);

        DEBUG_RENDERER.then(|| {
            tracing::debug!(message = "render_rows", rows = ?rows, bytes = out.len());
        });

        self.flush(&out)
    }

    fn push_screen_row(&self, out: &mut String, frame: &Frame<'_>, screen_row: usize) {
        out.push_str(&cursor_position(screen_row + 1, 1));
        self.draw_row(out, frame, screen_row);
        out.push_str(CLEAR_LINE);
    }

    /// One screen line of text without the trailing line clear. Past the end of the
    /// document the line is a `~`.
    pub fn draw_row(&self, out: &mut String, frame: &Frame<'_>, screen_row: usize) {
        let doc_row = screen_row + frame.viewport.row_offset();
        let Some(row) = frame.doc.rows().get(doc_row) else {
            out.push('~');
            return;
        };

        let mut classes = row.highlight().to_vec();
        if let Some(found) = frame.search_match
            && found.row == doc_row
        {
            let tab_stop = frame.doc.tab_stop();
            let chars = row.chars();
            let start = expand_tabs(&chars[..found.char_index.min(chars.len())], tab_stop).len();
            let end = expand_tabs(&chars[..found.end().min(chars.len())], tab_stop).len();
            for class in classes.iter_mut().take(end).skip(start) {
                *class = HighlightClass::Match;
            }
        }

        let first_col = frame.viewport.col_offset();
        let last_col = first_col + frame.viewport.screen_cols();
        let mut current_color = SGR_DEFAULT_FG;
        let mut col = 0;

        for (&ch, &class) in row.render().iter().zip(classes.iter()) {
            let ch_width = char_display_width(ch);
            let ch_start = col;
            col += ch_width;

            // Entirely left of the edge. A zero width char at the edge stays.
            if ch_start < first_col && col <= first_col {
                continue;
            }
            if col > last_col {
                break;
            }
            // A wide char cut by the left edge shows as blanks.
            if ch_start < first_col {
                out.push_str(&" ".repeat(col - first_col));
                continue;
            }

            if ch.is_control() {
                out.push_str(&sgr(SGR_INVERSE));
                out.push(control_glyph(ch));
                out.push_str(SGR_RESET);
                out.push_str(&sgr(current_color));
            } else {
                let color = self.color_scheme.color_for(class);
                if color != current_color {
                    current_color = color;
                    out.push_str(&sgr(color));
                }
                out.push(ch);
            }
        }

        out.push_str(&sgr(SGR_DEFAULT_FG));
    }

    fn flush(&self, out: &str) -> EditorResult<()> {
        self.output_device
            .write_and_flush(out.as_bytes())
            .map_err(|err| EditorError::Terminal {
                message: err.to_string(),
            })
    }
}

/// `^A` shows as `A`, `NUL` as `@`, anything else as `?`.
fn control_glyph(ch: char) -> char {
    let code = u32::from(ch);
    if code < 26 {
        char::from_u32(u32::from('@') + code).unwrap_or('?')
    } else {
        '?'
    }
}

/// Inverse video line: name, line count and modified flag on the left, file type and
/// cursor row on the right. The right part is dropped when it does not fit.
pub fn draw_status_bar(out: &mut String, frame: &Frame<'_>) {
    let doc = frame.doc;
    let screen_cols = frame.viewport.screen_cols();

    let filename = doc.filename().map_or_else(
        || "[No Name]".to_string(),
        |it| {
            it.display()
                .to_string()
                .chars()
                .take(STATUS_FILENAME_MAX_CHARS)
                .collect()
        },
    );
    let modified = if doc.is_modified() { "(modified)" } else { "" };
    let left = truncate_to_width(
        &format!("{filename} - {} lines {modified}", doc.num_rows()),
        screen_cols,
        ELLIPSIS,
    );
    let right = format!(
        "{} | {}/{}",
        doc.filetype().unwrap_or("no filetype"),
        frame.viewport.cursor().row + 1,
        doc.num_rows()
    );

    out.push_str(&sgr(SGR_INVERSE));
    out.push_str(&left);
    let used = left.width() + right.width();
    if used <= screen_cols {
        out.push_str(&" ".repeat(screen_cols - used));
        out.push_str(&right);
    }
    out.push_str(CRLF);
    out.push_str(SGR_RESET);
}

pub fn draw_message_bar(out: &mut String, frame: &Frame<'_>) {
    out.push_str(CLEAR_LINE);
    out.push_str(&truncate_to_width(
        frame.message,
        frame.viewport.screen_cols(),
        ELLIPSIS,
    ));
}

fn push_cursor_position(out: &mut String, viewport: &Viewport) {
    let (row, col) = viewport.screen_cursor();
    out.push_str(&cursor_position(row + 1, col + 1));
}

/// Cut `text` to at most `max_width` columns, ending with `tail` when something was
/// cut off.
#[must_use]
pub fn truncate_to_width(text: &str, max_width: usize, tail: &str) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    let (budget, tail) = match max_width.checked_sub(tail.width()) {
        Some(budget) => (budget, tail),
        None => (max_width, ""),
    };
    let mut used = 0;
    let mut acc = String::new();
    for ch in text.chars() {
        used += char_display_width(ch);
        if used > budget {
            break;
        }
        acc.push(ch);
    }
    acc.push_str(tail);
    acc
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{OutputDeviceExt, SyntaxDefinition, height, width};
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    fn c_doc(lines: &[&str]) -> Document {
        let syntax = SyntaxDefinition::new("c")
            .with_keywords(HighlightClass::Keyword1, &["if"])
            .with_single_line_comment("//")
            .with_numbers();
        let mut doc = Document::default().with_syntax(Some(syntax));
        doc.open_from_lines(lines);
        doc
    }

    fn renderer() -> Renderer { Renderer::new(OutputDevice::new_mock().0, ColorScheme::default()) }

    fn draw(frame: &Frame<'_>, screen_row: usize) -> String {
        let mut out = String::new();
        renderer().draw_row(&mut out, frame, screen_row);
        out
    }

    fn frame<'a>(doc: &'a Document, viewport: &'a Viewport) -> Frame<'a> {
        Frame {
            doc,
            viewport,
            message: "",
            search_match: None,
        }
    }

    #[test_case("hello world", 8, "hello...")]
    #[test_case("short", 8, "short")]
    #[test_case("exactly8", 8, "exactly8")]
    #[test_case("中文中文中文", 7, "中文...")]
    #[test_case("abcdef", 2, "ab")]
    fn test_truncate(text: &str, max_width: usize, expected: &str) {
        assert_eq!(truncate_to_width(text, max_width, ELLIPSIS), expected);
    }

    #[test]
    fn test_color_changes_only_on_class_change() {
        let doc = c_doc(&["if x // c"]);
        let viewport = Viewport::new(width(80_usize) + height(10_usize));
        assert_eq!(
            draw(&frame(&doc, &viewport), 0),
            "\x1b[94mif\x1b[39m x \x1b[90m// c\x1b[39m"
        );
    }

    #[test]
    fn test_rows_past_end_are_tildes() {
        let doc = c_doc(&["x"]);
        let viewport = Viewport::new(width(80_usize) + height(10_usize));
        assert_eq!(draw(&frame(&doc, &viewport), 1), "~");
    }

    #[test]
    fn test_horizontal_slice_by_display_width() {
        let doc = c_doc(&["ab中de"]);
        let mut viewport = Viewport::new(width(3_usize) + height(10_usize));
        assert_eq!(draw(&frame(&doc, &viewport), 0), "ab\x1b[39m");

        viewport.set_cursor_col(&doc, 4);
        // Cursor at column 5, so columns 3..6 are shown: the right half of 中 and "de".
        assert_eq!(viewport.col_offset(), 3);
        assert_eq!(draw(&frame(&doc, &viewport), 0), " de\x1b[39m");
    }

    #[test]
    fn test_zero_width_chars_are_drawn() {
        let doc = c_doc(&["\u{301}e\u{301}x"]);
        let viewport = Viewport::new(width(80_usize) + height(10_usize));
        assert_eq!(
            draw(&frame(&doc, &viewport), 0),
            "\u{301}e\u{301}x\x1b[39m"
        );
    }

    #[test]
    fn test_control_chars_are_inverse_glyphs() {
        let doc = c_doc(&["\u{1} 1"]);
        let viewport = Viewport::new(width(80_usize) + height(10_usize));
        assert_eq!(
            draw(&frame(&doc, &viewport), 0),
            "\x1b[7mA\x1b[m\x1b[39m \x1b[33m1\x1b[39m"
        );
    }

    #[test]
    fn test_search_match_overlay() {
        let doc = c_doc(&["\tfoo"]);
        let viewport = Viewport::new(width(80_usize) + height(10_usize));
        let frame = Frame {
            search_match: Some(SearchMatch {
                row: 0,
                char_index: 1,
                len: 2,
            }),
            ..frame(&doc, &viewport)
        };
        assert_eq!(
            draw(&frame, 0),
            "        \x1b[32mfo\x1b[39mo\x1b[39m"
        );
        // The stored classes are untouched.
        assert!(
            doc.get_row(0)
                .unwrap()
                .highlight()
                .iter()
                .all(|it| *it != HighlightClass::Match)
        );
    }

    #[test]
    fn test_status_bar() {
        let mut doc = c_doc(&["a", "b"]);
        let viewport = Viewport::new(width(45_usize) + height(10_usize));
        let mut out = String::new();
        draw_status_bar(&mut out, &frame(&doc, &viewport));
        let left = "[No Name] - 2 lines ";
        let right = "c | 1/2";
        let padding = " ".repeat(45 - left.len() - right.len());
        assert_eq!(out, format!("\x1b[7m{left}{padding}{right}\r\n\x1b[m"));

        doc.set_filename("a/very/long/path/to/some/file.c");
        doc.set_row(0, vec!['z']).unwrap();
        let mut out = String::new();
        draw_status_bar(&mut out, &frame(&doc, &viewport));
        assert!(out.starts_with("\x1b[7ma/very/long/path/to/ - 2 lines (modified)"));
        assert!(!out.contains("c | 1/2"));
    }

    #[test]
    fn test_message_bar_truncates() {
        let doc = c_doc(&["a"]);
        let viewport = Viewport::new(width(10_usize) + height(10_usize));
        let frame = Frame {
            message: "saved file: something.c",
            ..frame(&doc, &viewport)
        };
        let mut out = String::new();
        draw_message_bar(&mut out, &frame);
        assert_eq!(out, "\x1b[Ksaved f...");
    }

    #[test]
    fn test_render_frame_layout() {
        let (device, mock) = OutputDevice::new_mock();
        let renderer = Renderer::new(device, ColorScheme::default());
        let doc = c_doc(&["x"]);
        let mut viewport = Viewport::new(width(30_usize) + height(4_usize));
        viewport.set_cursor_col(&doc, 1);

        renderer.render_frame(&frame(&doc, &viewport)).unwrap();

        let expected = [
            "\x1b[?25l\x1b[H",
            "x\x1b[39m\x1b[K\r\n",
            "~\x1b[K\r\n",
            "\x1b[7m[No Name] - 1 lines    c | 1/1\r\n\x1b[m",
            "\x1b[K",
            "\x1b[1;2H\x1b[?25h",
        ]
        .concat();
        assert_eq!(mock.get_copy_of_buffer_as_string(), expected);
    }

    #[test]
    fn test_render_rows_draws_visible_rows_and_bars() {
        let (device, mock) = OutputDevice::new_mock();
        let renderer = Renderer::new(device, ColorScheme::default());
        let doc = c_doc(&["a", "b", "c"]);
        let viewport = Viewport::new(width(30_usize) + height(4_usize));

        // Only rows 0 and 1 fit on screen.
        renderer.render_rows(&frame(&doc, &viewport), 1..3).unwrap();

        let expected = [
            "\x1b[?25l",
            "\x1b[2;1Hb\x1b[39m\x1b[K",
            "\x1b[3;1H\x1b[7m[No Name] - 3 lines    c | 1/3\r\n\x1b[m",
            "\x1b[K",
            "\x1b[1;1H\x1b[?25h",
        ]
        .concat();
        assert_eq!(mock.get_copy_of_buffer_as_string(), expected);
    }

    #[test]
    fn test_render_row_draws_one_line_when_visible() {
        let (device, mock) = OutputDevice::new_mock();
        let renderer = Renderer::new(device, ColorScheme::default());
        let doc = c_doc(&["a", "b"]);
        let viewport = Viewport::new(width(20_usize) + height(10_usize));

        renderer.render_row(&frame(&doc, &viewport), 1).unwrap();
        assert_eq!(
            mock.get_copy_of_buffer_as_string(),
            "\x1b[?25l\x1b[2;1Hb\x1b[39m\x1b[K\x1b[1;1H\x1b[?25h"
        );

        // Off screen rows fall back to a full frame.
        mock.clear();
        renderer.render_row(&frame(&doc, &viewport), 42).unwrap();
        assert!(
            mock.get_copy_of_buffer_as_string()
                .starts_with("\x1b[?25l\x1b[Ha\x1b[39m")
        );
    }
}
