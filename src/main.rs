// SPDX-License-Identifier: MIT
//
// vrfs-name — a terminal front-end for the VRFS username editor.
//
// This binary is the stand-in for the game's web UI: a line-oriented
// command loop that only ever calls `store.update(...)` and re-renders
// from the store snapshot plus the two pure crates:
//
//   vrfs-color  → RGB/hex parsing, the 3-digit quantized code
//   vrfs-markup → segment partition, markup string, advisory warnings
//   vrfs-store  → the observable configuration store
//
// Each input line flows through:
//
//   stdin → parse_command → ConfigUpdate → Store::update
//     → subscriber → compose → ANSI preview + markup + warnings
//
// The markup line printed on every change IS the copy payload — clipboard
// integration is the surrounding terminal's job, not ours.

use std::io::{self, BufRead, Write};

use regex::Regex;
use unicode_width::UnicodeWidthChar;

use vrfs_color::{Code, Rgb};
use vrfs_markup::{MAX_RENDERED_LEN, Segment, Style};
use vrfs_store::{AnchorPatch, AnchorSlot, ConfigUpdate, EditorConfig, Store};

// ─── Swatches ───────────────────────────────────────────────────────────────

/// The preset color strip, addressable by 1-based index or by name.
const SWATCHES: [(&str, Rgb); 8] = [
    ("orange", Rgb::new(255, 142, 57)),
    ("red", Rgb::new(255, 0, 0)),
    ("green", Rgb::new(0, 255, 0)),
    ("blue", Rgb::new(0, 0, 255)),
    ("yellow", Rgb::new(255, 255, 0)),
    ("magenta", Rgb::new(255, 0, 255)),
    ("cyan", Rgb::new(0, 255, 255)),
    ("white", Rgb::new(255, 255, 255)),
];

// ─── Commands ───────────────────────────────────────────────────────────────

/// One parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Command {
    /// A store mutation.
    Update(ConfigUpdate),
    /// Flip a single style flag on the current flag set. Resolved against
    /// the store at apply time, since `ConfigUpdate::Style` replaces the
    /// whole set.
    SetFlag { flag: Style, on: bool },
    /// Re-print the current readout.
    Show,
    /// Print the command reference.
    Help,
    /// Restore the startup defaults.
    Reset,
    /// Leave the loop.
    Quit,
}

/// Compiled color-argument grammars, built once per session.
struct ColorSyntax {
    /// `#RRGGBB` / `RRGGBB`.
    hex: Regex,
    /// `R G B` or `R,G,B` raw integer channels.
    triplet: Regex,
}

impl ColorSyntax {
    /// Compile the hardcoded patterns (they cannot fail).
    fn new() -> Self {
        Self {
            hex: Regex::new(r"^#?[0-9A-Fa-f]{6}$").expect("hardcoded pattern"),
            triplet: Regex::new(r"^(-?\d+)[,\s]+(-?\d+)[,\s]+(-?\d+)$").expect("hardcoded pattern"),
        }
    }

    /// Parse a color argument in either form. Range and hex validation is
    /// the codec's job; this only decides which constructor to call.
    fn parse_color(&self, arg: &str) -> Result<Rgb, String> {
        let arg = arg.trim();
        if self.hex.is_match(arg) {
            return Rgb::from_hex(arg).map_err(|e| e.to_string());
        }
        if let Some(caps) = self.triplet.captures(arg) {
            let r = parse_i64(&caps[1])?;
            let g = parse_i64(&caps[2])?;
            let b = parse_i64(&caps[3])?;
            return Rgb::from_channels(r, g, b).map_err(|e| e.to_string());
        }
        Err(format!("not a color: `{arg}` (use #RRGGBB or `R G B`)"))
    }
}

/// Parse one input line into a command.
fn parse_command(line: &str, syntax: &ColorSyntax) -> Result<Command, String> {
    let (word, rest) = split_word(line.trim());

    match word {
        "quit" | "exit" | "q" => Ok(Command::Quit),
        "help" | "?" => Ok(Command::Help),
        "show" => Ok(Command::Show),
        "reset" => Ok(Command::Reset),
        "name" => Ok(Command::Update(ConfigUpdate::Username(rest.to_string()))),
        "color" => Ok(Command::Update(ConfigUpdate::BaseColor(
            syntax.parse_color(rest)?,
        ))),
        "swatch" => Ok(Command::Update(ConfigUpdate::BaseColor(parse_swatch(
            rest,
        )?))),
        "second" => parse_anchor_command(AnchorSlot::Second, rest, syntax),
        "third" => parse_anchor_command(AnchorSlot::Third, rest, syntax),
        "bold" => parse_flag(Style::BOLD, rest),
        "italic" => parse_flag(Style::ITALIC, rest),
        "underline" => parse_flag(Style::UNDERLINE, rest),
        "small" => parse_flag(Style::SMALL, rest),
        "highlight" => parse_flag(Style::HIGHLIGHT, rest),
        "" => Err("empty command (try `help`)".to_string()),
        _ => Err(format!("unknown command `{word}` (try `help`)")),
    }
}

/// Split off the first whitespace-delimited word.
fn split_word(s: &str) -> (&str, &str) {
    match s.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (s, ""),
    }
}

fn parse_flag(flag: Style, rest: &str) -> Result<Command, String> {
    Ok(Command::SetFlag {
        flag,
        on: parse_on_off(rest)?,
    })
}

fn parse_on_off(arg: &str) -> Result<bool, String> {
    match arg {
        "on" => Ok(true),
        "off" => Ok(false),
        _ => Err(format!("expected `on` or `off`, got `{arg}`")),
    }
}

fn parse_i64(s: &str) -> Result<i64, String> {
    s.parse().map_err(|_| format!("not a number: `{s}`"))
}

fn parse_position(arg: &str) -> Result<usize, String> {
    arg.parse().map_err(|_| format!("not a position: `{arg}`"))
}

/// Resolve a swatch reference, by 1-based index or by name.
fn parse_swatch(arg: &str) -> Result<Rgb, String> {
    if let Ok(n) = arg.parse::<usize>() {
        return SWATCHES
            .get(n.wrapping_sub(1))
            .map(|(_, rgb)| *rgb)
            .ok_or_else(|| format!("no swatch {n} (1-{})", SWATCHES.len()));
    }
    SWATCHES
        .iter()
        .find(|(name, _)| *name == arg)
        .map(|(_, rgb)| *rgb)
        .ok_or_else(|| format!("no swatch named `{arg}`"))
}

/// Parse the tail of a `second ...` / `third ...` line into an anchor patch.
fn parse_anchor_command(
    slot: AnchorSlot,
    rest: &str,
    syntax: &ColorSyntax,
) -> Result<Command, String> {
    let (word, arg) = split_word(rest);
    let patch = match word {
        "on" if arg.is_empty() => AnchorPatch::enabled(true),
        "off" if arg.is_empty() => AnchorPatch::enabled(false),
        "at" => AnchorPatch::position(parse_position(arg)?),
        "color" => AnchorPatch::color(syntax.parse_color(arg)?),
        "swatch" => AnchorPatch::color(parse_swatch(arg)?),
        _ => {
            return Err(
                "expected `on`, `off`, `at <pos>`, `color <color>`, or `swatch <n>`".to_string(),
            );
        }
    };
    Ok(Command::Update(ConfigUpdate::Anchor { slot, patch }))
}

// ─── Rendering ──────────────────────────────────────────────────────────────

/// Print one labelled row of the readout.
fn row(label: &str, value: &str) {
    println!("  {label:<10}{value}");
}

/// Paint the full readout for a configuration snapshot.
///
/// This is the store subscriber: it runs on every update, recomputing the
/// composition from scratch — the core is cheap pure functions, so a full
/// re-derivation per keystroke is the intended mode of operation.
fn render(config: &EditorConfig) {
    let result = config.compose();

    println!();
    row("preview", &ansi_preview(config.style, &result.segments));
    for (anchor, label) in config.anchors.iter().zip(["second", "third"]) {
        if anchor.enabled {
            let col = display_column(&config.username, anchor.position);
            let Rgb { r, g, b } = anchor.color;
            row(
                "",
                &format!(
                    "{:col$}\x1b[38;2;{r};{g};{b}m^\x1b[0m {label} at {}",
                    "", anchor.position
                ),
            );
        }
    }
    row("base", &color_readout(config.base_color));
    for (anchor, label) in config.anchors.iter().zip(["second", "third"]) {
        let state = if anchor.enabled {
            format!("on at {}", anchor.position)
        } else {
            "off".to_string()
        };
        row(label, &format!("{state}  {}", color_readout(anchor.color)));
    }
    row("style", &style_names(config.style));
    row(
        "markup",
        &format!(
            "{}  ({}/{MAX_RENDERED_LEN})",
            result.markup,
            result.markup.chars().count()
        ),
    );
    for warning in &result.warnings {
        println!("  warning: {warning}");
    }
}

/// `#RRGGBB  rgb(r, g, b)  code DDD` — the derived readouts for one color.
fn color_readout(rgb: Rgb) -> String {
    format!(
        "{rgb}  rgb({}, {}, {})  code {}",
        rgb.r,
        rgb.g,
        rgb.b,
        Code::from_rgb(rgb)
    )
}

/// The username painted with truecolor segments and SGR approximations of
/// the style flags: bold 1, italic 3, underline 4, small as dim 2,
/// highlight as inverse 7.
fn ansi_preview(style: Style, segments: &[Segment]) -> String {
    if segments.is_empty() {
        return "(empty username)".to_string();
    }
    let mut out = style_sgr(style);
    for segment in segments {
        let Rgb { r, g, b } = segment.color;
        out.push_str(&format!("\x1b[38;2;{r};{g};{b}m"));
        out.push_str(&segment.text);
    }
    out.push_str("\x1b[0m");
    out
}

/// SGR prefix for the set style flags.
fn style_sgr(style: Style) -> String {
    let mut out = String::new();
    for (flag, code) in [
        (Style::BOLD, "1"),
        (Style::ITALIC, "3"),
        (Style::UNDERLINE, "4"),
        (Style::SMALL, "2"),
        (Style::HIGHLIGHT, "7"),
    ] {
        if style.contains(flag) {
            out.push_str("\x1b[");
            out.push_str(code);
            out.push('m');
        }
    }
    out
}

/// Human-readable flag list for the readout.
fn style_names(style: Style) -> String {
    let names: Vec<&str> = [
        (Style::BOLD, "bold"),
        (Style::ITALIC, "italic"),
        (Style::UNDERLINE, "underline"),
        (Style::SMALL, "small"),
        (Style::HIGHLIGHT, "highlight"),
    ]
    .iter()
    .filter(|(flag, _)| style.contains(*flag))
    .map(|(_, name)| *name)
    .collect();
    if names.is_empty() {
        "(none)".to_string()
    } else {
        names.join(" ")
    }
}

/// Display column of a char position, in terminal cells. Wide chars (CJK,
/// some emoji) occupy two columns, so the anchor marker stays under the
/// char it points at.
fn display_column(username: &str, position: usize) -> usize {
    username
        .chars()
        .take(position)
        .map(|c| c.width().unwrap_or(0))
        .sum()
}

fn print_help() {
    println!(
        "\
commands:
  name <text>                  set the username
  color <#RRGGBB | R G B>      set the base color
  swatch <1-8 | name>          base color from the preset strip
  second|third on|off          enable/disable an anchor color
  second|third at <pos>        move an anchor (char offset)
  second|third color <color>   set an anchor color
  second|third swatch <n>      anchor color from the preset strip
  bold|italic|underline|small|highlight on|off
  show | reset | help | quit

swatches: {}",
        SWATCHES
            .iter()
            .enumerate()
            .map(|(i, (name, _))| format!("{} {name}", i + 1))
            .collect::<Vec<_>>()
            .join(", ")
    );
}

// ─── Entry point ────────────────────────────────────────────────────────────

fn main() -> io::Result<()> {
    let syntax = ColorSyntax::new();
    let mut store = Store::new();

    println!("VRFS username editor — type `help` for commands.");
    render(store.config());
    store.subscribe(render);

    let stdin = io::stdin();
    let mut line = String::new();
    loop {
        print!("> ");
        io::stdout().flush()?;
        line.clear();
        if stdin.lock().read_line(&mut line)? == 0 {
            break; // EOF
        }
        let input = line.trim();
        if input.is_empty() {
            continue;
        }
        match parse_command(input, &syntax) {
            Ok(Command::Quit) => break,
            Ok(Command::Help) => print_help(),
            Ok(Command::Show) => render(store.config()),
            Ok(Command::Reset) => store.reset(),
            Ok(Command::SetFlag { flag, on }) => {
                let mut style = store.config().style;
                style.set(flag, on);
                store.update(ConfigUpdate::Style(style));
            }
            Ok(Command::Update(update)) => store.update(update),
            Err(message) => eprintln!("error: {message}"),
        }
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
