//! Wallaby demo CLI
//!
//! Builds a scripted document, applies a handful of absolute and relative
//! layout directives, and prints the stylesheet the engine generates —
//! then mutates a reactive input and the destination's box metrics to
//! show the rules re-rendering in place.

use std::rc::Rc;

use anyhow::Result;
use clap::Parser;
use wallaby_css::{Length, LengthExt, PositionValue};
use wallaby_dom::{BoxMetrics, Document};
use wallaby_layout::{Autolayout, HorizontalSide, VerticalSide};
use wallaby_reactive::Value;

/// Render a demo layout and print the generated stylesheet.
#[derive(Parser)]
#[command(name = "wallaby", version, about)]
struct Args {
    /// Print only the generated CSS text
    #[arg(long)]
    css_only: bool,

    /// Write the generated CSS to a file instead of stdout
    #[arg(long)]
    out: Option<std::path::PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let document = Rc::new(Document::new());
    let panel = document.create_element("div");
    let card = document.create_element("div");
    let badge = document.create_element("span");
    document.append_child(document.root(), panel);
    document.append_child(panel, card);
    document.append_child(panel, badge);

    document.set_computed_style(panel, "position", "relative");
    document.set_computed_style(card, "position", "absolute");
    document.set_computed_style(badge, "position", "absolute");

    document.set_metrics(
        panel,
        BoxMetrics {
            left: 0.0,
            top: 0.0,
            width: 800.0,
            height: 600.0,
        },
    );
    document.set_metrics(
        card,
        BoxMetrics {
            left: 100.0,
            top: 120.0,
            width: 300.0,
            height: 200.0,
        },
    );
    document.set_metrics(
        badge,
        BoxMetrics {
            left: 0.0,
            top: 0.0,
            width: 40.0,
            height: 16.0,
        },
    );

    let layout = Autolayout::new(Rc::clone(&document));

    // Absolute directives, one of them reactive.
    let card_top = Value::new(Length::px(24.0));
    let card_view = layout.view(card);
    let _ = card_view.position(PositionValue::Absolute, &[]);
    let _ = card_view.top(&card_top, VerticalSide::Top, 1.0, &[]);
    let _ = card_view.center_x(0.px(), HorizontalSide::Center, 1.0, &[]);
    let _ = card_view.width_to_parent((-40).px(), 1.0, &[]);
    let _ = card_view.padding_axes(8.px(), 12.px(), &[]);

    // A relative constraint: the badge hangs off the card's left edge.
    let badge_view = layout.view(badge);
    let _ = badge_view
        .right_to(HorizontalSide::Left, card, (-4).px(), 1.0)
        .map_err(|e| anyhow::anyhow!("badge constraint rejected: {e}"))?;

    if !args.css_only {
        println!("=== Document ===");
        for &child in &[panel, card, badge] {
            println!(
                "<{}> uid={} classes=[{}]",
                document.tag(child),
                document.uid(child),
                document.classes(child).join(" ")
            );
        }
        println!("\n=== Generated stylesheet ===");
    }
    print!("{}", layout.css_text());

    if !args.css_only {
        // Mutate the reactive input and the constraint destination to
        // show the same rules re-rendering, never duplicating.
        card_top.set(Length::px(48.0));
        document.set_metrics(
            card,
            BoxMetrics {
                left: 140.0,
                top: 120.0,
                width: 300.0,
                height: 200.0,
            },
        );
        println!("\n=== After card_top = 48px and card moved ===");
        print!("{}", layout.css_text());
    }

    if let Some(path) = args.out {
        std::fs::write(&path, layout.css_text())?;
        if !args.css_only {
            println!("\nwrote {}", path.display());
        }
    }

    Ok(())
}
