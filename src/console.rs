//! Coloured terminal output for the binary. Writes to stderr so stdout
//! carries only the token.

use colored::Colorize;

use crate::token::TokenPurpose;

fn badge(text: &str, fg: colored::Color, bg: colored::Color) -> colored::ColoredString {
    format!(" {} ", text).color(fg).on_color(bg).bold()
}

fn short_kid(kid: &str) -> &str {
    kid.get(..8).unwrap_or(kid)
}

fn purpose_label(purpose: TokenPurpose) -> &'static str {
    match purpose {
        TokenPurpose::AnonymousRequest => "anonymous",
        TokenPurpose::BiometricRequest => "biometric",
    }
}

pub fn log_signed(purpose: TokenPurpose, kid: &str, alg: &str, action: &str) {
    eprintln!(
        "{} {} {} {} {} {}",
        badge("SIGNED", colored::Color::Black, colored::Color::Green),
        purpose_label(purpose).white(),
        "action:".dimmed(), action.cyan(),
        format!("kid:{}", short_kid(kid)).dimmed(),
        alg.yellow()
    );
}

pub fn log_failure(reason: &str) {
    eprintln!("{} {}", badge("FAIL", colored::Color::White, colored::Color::Red), reason.red());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_kid_truncates_long_ids() {
        assert_eq!(short_kid("0123456789abcdef"), "01234567");
        assert_eq!(short_kid("abc"), "abc");
    }

    #[test]
    fn purpose_labels_are_short() {
        assert_eq!(purpose_label(TokenPurpose::AnonymousRequest), "anonymous");
        assert_eq!(purpose_label(TokenPurpose::BiometricRequest), "biometric");
    }
}
