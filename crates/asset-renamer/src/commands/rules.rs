use asset_names::rules::{RENAME_RULES, TEXTURE_CAPTURE, TEXTURE_CHANNELS, TEXTURE_PREFIX};
use asset_names::AssetKind;
use colored::Colorize;
use convert_case::{Case, Casing};

pub fn print_rules() {
    println!("Asset rename rules (type -> prefix [capture token]):");
    for rule in RENAME_RULES {
        print_rule(rule.kind, rule.target_prefix, rule.capture);
    }
    print_rule(AssetKind::Texture2D, TEXTURE_PREFIX, TEXTURE_CAPTURE);
    println!(
        "  {:24} -> {{basename}}_ [basename]",
        "<other>".bright_yellow().bold()
    );

    println!();
    println!("Texture channels, checked in order (channel -> suffix [capture token]):");
    for rule in TEXTURE_CHANNELS {
        println!(
            "  {:24} -> {} [{}]",
            rule.channel.to_string().bright_yellow().bold(),
            rule.target_suffix.bright_green().bold(),
            rule.capture
        );
    }
}

fn print_rule(kind: AssetKind, prefix: &str, capture: &str) {
    let tag = kind.to_string();
    let snake = tag.to_case(Case::Snake);
    println!(
        "  {:24} -> {} [{}] (also: {})",
        tag.bright_yellow().bold(),
        prefix.bright_green().bold(),
        capture,
        snake
    );
}
