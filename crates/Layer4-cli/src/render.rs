//! 터미널 출력 - 권한 표, 비교 요약
//!
//! 색상은 패딩 이후에 입혀서 열 정렬이 깨지지 않게 한다.

use apkperm_foundation::{Category, PermissionDiff, PermissionRecord};
use crossterm::style::{Color, Stylize};

const HEADERS: [&str; 4] = ["Permission", "Category", "Group", "Sensitive"];

/// `--no-color`, 설정, `NO_COLOR` 환경 변수를 모두 반영
pub fn color_enabled(disabled: bool) -> bool {
    let no_color_env = std::env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty());
    !disabled && !no_color_env
}

/// 색상 on/off 를 감싼 출력 도우미
#[derive(Debug, Clone, Copy)]
pub struct Painter {
    color: bool,
}

impl Painter {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    pub fn paint(&self, text: &str, color: Color) -> String {
        if self.color {
            text.with(color).to_string()
        } else {
            text.to_string()
        }
    }

    pub fn bold(&self, text: &str, color: Color) -> String {
        if self.color {
            text.with(color).bold().to_string()
        } else {
            text.to_string()
        }
    }

    pub fn error(&self, text: &str) -> String {
        self.bold(text, Color::Red)
    }

    pub fn success(&self, text: &str) -> String {
        self.paint(text, Color::Green)
    }
}

fn category_color(category: Category) -> Color {
    match category {
        Category::Dangerous => Color::Red,
        Category::Signature => Color::Yellow,
        Category::Unknown => Color::DarkGrey,
        Category::Normal => Color::White,
    }
}

fn sensitive_mark(sensitive: bool) -> &'static str {
    if sensitive {
        "✓"
    } else {
        "✗"
    }
}

/// 권한 표 문자열
pub fn format_table(painter: &Painter, title: &str, records: &[PermissionRecord]) -> String {
    let mut out = String::new();
    out.push_str(&painter.bold(title, Color::Cyan));
    out.push('\n');

    if records.is_empty() {
        out.push_str("(no permissions)\n");
        return out;
    }

    let mut widths = HEADERS.map(|h| h.chars().count());
    for r in records {
        widths[0] = widths[0].max(r.name.chars().count());
        widths[1] = widths[1].max(r.category.as_str().len());
        widths[2] = widths[2].max(r.group.chars().count());
    }

    let header: Vec<String> = HEADERS
        .iter()
        .zip(widths)
        .map(|(h, w)| painter.bold(&format!("{:<w$}", h, w = w), Color::White))
        .collect();
    out.push_str(header.join("  ").trim_end());
    out.push('\n');
    let total: usize = widths.iter().sum::<usize>() + 2 * (widths.len() - 1);
    out.push_str(&"-".repeat(total));
    out.push('\n');

    for r in records {
        let cells = [
            painter.paint(
                &format!("{:<w$}", r.name, w = widths[0]),
                category_color(r.category),
            ),
            painter.paint(
                &format!("{:<w$}", r.category.as_str(), w = widths[1]),
                Color::Magenta,
            ),
            painter.paint(&format!("{:<w$}", r.group, w = widths[2]), Color::Green),
            painter.paint(sensitive_mark(r.sensitive), Color::Yellow),
        ];
        out.push_str(&cells.join("  "));
        out.push('\n');
    }

    out
}

pub fn print_table(painter: &Painter, title: &str, records: &[PermissionRecord]) {
    println!("{}", format_table(painter, title, records));
}

/// 비교 요약 문자열
pub fn format_diff(painter: &Painter, diff: &PermissionDiff) -> String {
    let mut out = String::new();
    out.push_str(&painter.bold("Version comparison:", Color::Cyan));
    out.push('\n');

    if diff.is_empty() {
        out.push_str("No permission changes\n");
        return out;
    }

    let join = |names: &std::collections::BTreeSet<String>| {
        names.iter().map(String::as_str).collect::<Vec<_>>().join(", ")
    };

    if !diff.added.is_empty() {
        out.push_str(&format!(
            "{} {}\n",
            painter.paint("+ Added:", Color::Green),
            join(&diff.added)
        ));
    }
    if !diff.removed.is_empty() {
        out.push_str(&format!(
            "{} {}\n",
            painter.paint("- Removed:", Color::Red),
            join(&diff.removed)
        ));
    }
    if diff.has_new_dangerous() {
        out.push_str(&format!(
            "{} {}\n",
            painter.error("! New dangerous:"),
            join(&diff.new_dangerous)
        ));
    }
    out
}

pub fn print_diff(painter: &Painter, diff: &PermissionDiff) {
    println!("{}", format_diff(painter, diff));
}
