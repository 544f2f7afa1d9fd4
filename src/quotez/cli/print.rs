use colored::Colorize;
use quotez::api::{CmdMessage, ListedPage, MessageLevel};
use quotez::model::Quote;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const ID_WIDTH: usize = 6;
const AUTHOR_WIDTH: usize = 20;
const CONTENT_WIDTH: usize = 60;

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

pub(super) fn print_page(listed: &ListedPage) {
    if listed.items.is_empty() {
        return;
    }

    println!(
        "{} / {} / {}",
        pad_to_width("id", ID_WIDTH).bold(),
        pad_to_width("author", AUTHOR_WIDTH).bold(),
        "content".bold()
    );
    println!("{}", "-".repeat(ID_WIDTH + AUTHOR_WIDTH + CONTENT_WIDTH + 6));

    for quote in &listed.items {
        println!(
            "{} / {} / {}",
            pad_to_width(&quote.id.to_string(), ID_WIDTH).yellow(),
            pad_to_width(&truncate_to_width(&quote.author, AUTHOR_WIDTH), AUTHOR_WIDTH),
            truncate_to_width(&single_line(&quote.content), CONTENT_WIDTH)
        );
    }

    println!("{}", page_footer(listed).dimmed());
}

pub(super) fn print_quotes(quotes: &[Quote]) {
    for (i, quote) in quotes.iter().enumerate() {
        if i > 0 {
            println!();
        }
        println!("{} {}", format!("#{}", quote.id).yellow(), quote.author.bold());
        println!("--------------------------------");
        println!("{}", quote.content);
    }
}

/// "Page: 1 / [2]" style footer, current page in brackets.
fn page_footer(listed: &ListedPage) -> String {
    let pages: Vec<String> = (1..=listed.total_pages)
        .map(|p| {
            if p == listed.page {
                format!("[{}]", p)
            } else {
                p.to_string()
            }
        })
        .collect();
    format!(
        "Page: {} ({} quotes)",
        pages.join(" / "),
        listed.total_count
    )
}

fn single_line(s: &str) -> String {
    s.chars()
        .map(|c| if c == '\n' { ' ' } else { c })
        .collect()
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result.push('…');
    result
}

fn pad_to_width(s: &str, width: usize) -> String {
    let padding = width.saturating_sub(s.width());
    format!("{}{}", s, " ".repeat(padding))
}
