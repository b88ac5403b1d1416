mod page;
mod rain;

use std::io::{stdout, Stdout, Write};
use std::time::{Duration, Instant};

use anyhow::Result;
use clap::Parser;
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEventKind},
    execute, queue,
    style::{Color, Print, ResetColor, SetBackgroundColor, SetForegroundColor},
    terminal::{
        self, Clear, ClearType, DisableLineWrap, EnableLineWrap, EnterAlternateScreen,
        LeaveAlternateScreen,
    },
};
use rand::{rngs::StdRng, SeedableRng};

use page::{Page, Tone};
use rain::RainField;

// One glyph per terminal cell.
const CELL: u32 = 1;

#[derive(Parser, Debug)]
#[command(name = "termpitch")]
#[command(about = "The AdScriptly pitch page in your terminal, code rain included")]
struct Args {
    /// ms per animation tick (lower = faster)
    #[arg(long, default_value_t = 80)]
    ms: u64,

    /// seed the rain for a repeatable run (default: entropy)
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let mut out = stdout();

    terminal::enable_raw_mode()?;
    execute!(
        out,
        EnterAlternateScreen,
        DisableLineWrap,
        cursor::Hide,
        SetBackgroundColor(Color::Black),
        Clear(ClearType::All)
    )?;

    let result = run(&mut out, &args);

    execute!(
        out,
        ResetColor,
        cursor::Show,
        EnableLineWrap,
        LeaveAlternateScreen
    )?;
    terminal::disable_raw_mode()?;

    result
}

fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_entropy(),
    }
}

fn run(out: &mut Stdout, args: &Args) -> Result<()> {
    let mut rng = make_rng(args.seed);

    let (mut w, mut h) = terminal::size()?;
    let mut page = Page::build(w, h);
    let mut field = RainField::new(w as u32, page.hero_rows() as u32, CELL, &mut rng);
    let mut scroll = 0usize;

    let mut last_frame = Instant::now();

    loop {
        while event::poll(Duration::from_millis(0))? {
            match event::read()? {
                Event::Key(k) if k.kind == KeyEventKind::Press => {
                    let jump = h.saturating_sub(1) as usize;
                    match k.code {
                        KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
                        KeyCode::Up => scroll = scroll.saturating_sub(1),
                        KeyCode::Down => scroll = (scroll + 1).min(page.max_scroll(h)),
                        KeyCode::PageUp => scroll = scroll.saturating_sub(jump),
                        KeyCode::PageDown => {
                            scroll = (scroll + jump).min(page.max_scroll(h));
                        }
                        KeyCode::Home => scroll = 0,
                        KeyCode::End => scroll = page.max_scroll(h),
                        KeyCode::Char('r') => {
                            rng = make_rng(args.seed);
                            field =
                                RainField::new(w as u32, page.hero_rows() as u32, CELL, &mut rng);
                        }
                        _ => {}
                    }
                }
                Event::Resize(nw, nh) => {
                    w = nw;
                    h = nh;
                    // Relayout and reallocate from scratch; the next tick
                    // runs on fresh state.
                    page = Page::build(w, h);
                    field.resize(w as u32, page.hero_rows() as u32, &mut rng);
                    scroll = scroll.min(page.max_scroll(h));
                    queue!(out, SetBackgroundColor(Color::Black), Clear(ClearType::All))?;
                }
                _ => {}
            }
        }

        let frame_time = Duration::from_millis(args.ms.max(1));
        let now = Instant::now();
        let elapsed = now.saturating_duration_since(last_frame);
        if elapsed < frame_time {
            std::thread::sleep(frame_time - elapsed);
        }
        last_frame = Instant::now();

        field.tick(&mut rng);
        draw(out, &page, &field, scroll, w, h)?;
        out.flush()?;
    }
}

fn draw(
    out: &mut Stdout,
    page: &Page,
    field: &RainField,
    scroll: usize,
    w: u16,
    h: u16,
) -> Result<()> {
    for row in 0..h {
        let page_row = scroll + row as usize;

        if page_row < page.hero_rows() {
            // Rain underlay. Every cell repaints so last frame's glyphs and
            // overlay text get erased as the trails fade.
            let cols = (w as usize).min(field.columns());
            for col in 0..cols {
                let cell = field.cell_at(col, page_row);
                if cell.glyph == 0 {
                    queue!(out, cursor::MoveTo(col as u16, row), Print(' '))?;
                } else {
                    queue!(
                        out,
                        cursor::MoveTo(col as u16, row),
                        SetForegroundColor(rain_color(cell.level, cell.fresh)),
                        Print(cell.glyph as char)
                    )?;
                }
            }
        } else {
            queue!(out, cursor::MoveTo(0, row), Clear(ClearType::UntilNewLine))?;
        }

        if let Some(line) = page.row(page_row) {
            if !line.text.is_empty() {
                queue!(
                    out,
                    cursor::MoveTo(line.x, row),
                    SetForegroundColor(tone_color(line.tone)),
                    Print(&line.text)
                )?;
            }
        }
    }

    Ok(())
}

// Brand blue (96, 165, 250) scaled by the trail level. Freshly stamped
// glyphs pull toward white, standing in for the canvas glow.
fn rain_color(level: f32, fresh: bool) -> Color {
    let level = level.clamp(0.0, 1.0);
    let mut r = 96.0 * level;
    let mut g = 165.0 * level;
    let mut b = 250.0 * level;

    if fresh {
        let t = 0.35 * level;
        r += (255.0 - r) * t;
        g += (255.0 - g) * t;
        b += (255.0 - b) * t;
    }

    Color::Rgb {
        r: r as u8,
        g: g as u8,
        b: b as u8,
    }
}

fn tone_color(tone: Tone) -> Color {
    match tone {
        Tone::Brand => Color::Rgb {
            r: 96,
            g: 165,
            b: 250,
        },
        Tone::Headline => Color::Rgb {
            r: 238,
            g: 242,
            b: 250,
        },
        Tone::Accent => Color::Rgb {
            r: 129,
            g: 140,
            b: 248,
        },
        Tone::Body => Color::Rgb {
            r: 209,
            g: 213,
            b: 219,
        },
        Tone::Dim => Color::Rgb {
            r: 120,
            g: 130,
            b: 150,
        },
        Tone::Warn => Color::Rgb {
            r: 248,
            g: 113,
            b: 113,
        },
        Tone::Cta => Color::Rgb {
            r: 165,
            g: 180,
            b: 252,
        },
    }
}
