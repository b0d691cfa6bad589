use colored::*;

use crate::core::data::Goal;

pub struct OutputStyle;

impl OutputStyle {
    pub fn slug(text: &str) -> ColoredString {
        text.bold()
    }

    pub fn label(text: &str) -> ColoredString {
        text.cyan()
    }

    pub fn value(text: &str) -> ColoredString {
        text.clear()
    }

    pub fn points(text: &str) -> ColoredString {
        text.bright_yellow()
    }

    pub fn success(text: &str) -> ColoredString {
        text.green()
    }

    pub fn error(text: &str) -> ColoredString {
        text.red()
    }

    pub fn warning(text: &str) -> ColoredString {
        text.yellow()
    }

    pub fn muted(text: &str) -> ColoredString {
        text.dimmed()
    }

    pub fn print_field(label: &str, value: &str) {
        println!("{:>8}: {}", Self::label(label), Self::value(value));
    }

    pub fn print_field_colored(label: &str, value: &str, color_fn: impl Fn(&str) -> ColoredString) {
        println!("{:>8}: {}", Self::label(label), color_fn(value));
    }

    pub fn print_goal(goal: &Goal) {
        println!("{}", Self::slug(&goal.slug));
        println!(" {}", goal.title);
        println!(" {}", Self::muted(&goal.summary));
        println!();
    }
}

pub fn print_success(message: &str) {
    println!("✅ {}", OutputStyle::success(message));
}

pub fn print_info(message: &str) {
    println!("{}", OutputStyle::muted(message));
}
