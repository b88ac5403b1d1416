/// Static page shell: the marketing copy, pre-wrapped and centered to the
/// terminal width. The hero section comes first and reports its measured row
/// height so the rain field can size itself to it.
use std::cmp::min;

/// Height multiplier used when the hero section cannot be measured. Carried
/// over from the source material as-is; no derivation known.
pub const HERO_FALLBACK_FACTOR: f32 = 1.8;

// Body text wraps to this many columns at most, so wide terminals keep a
// readable measure.
const MAX_TEXT_WIDTH: u16 = 72;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Tone {
    Brand,
    Headline,
    Accent,
    Body,
    Dim,
    Warn,
    Cta,
}

pub struct Row {
    pub x: u16,
    pub text: String,
    pub tone: Tone,
}

pub struct Page {
    rows: Vec<Row>,
    hero_rows: usize,
}

struct Builder {
    width: u16,
    rows: Vec<Row>,
}

impl Builder {
    fn new(width: u16) -> Self {
        Builder {
            width,
            rows: Vec::new(),
        }
    }

    fn blank(&mut self, n: usize) {
        for _ in 0..n {
            self.rows.push(Row {
                x: 0,
                text: String::new(),
                tone: Tone::Body,
            });
        }
    }

    // A zero-width surface leaves nothing measurable, so lay out nothing.
    fn center(&mut self, text: &str, tone: Tone) {
        if self.width == 0 {
            return;
        }
        let text: String = text.chars().take(self.width as usize).collect();
        let len = text.chars().count() as u16;
        self.rows.push(Row {
            x: (self.width - len) / 2,
            text,
            tone,
        });
    }

    // Word-wrapped, centered paragraph.
    fn para(&mut self, text: &str, tone: Tone) {
        let measure = min(self.width.saturating_sub(4).max(1), MAX_TEXT_WIDTH);
        for line in wrap(text, measure as usize) {
            self.center(&line, tone);
        }
    }

    fn title(&mut self, text: &str, tone: Tone) {
        self.blank(2);
        self.center(text, tone);
        self.blank(1);
    }
}

fn wrap(text: &str, measure: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut line = String::new();
    let mut len = 0usize;

    for word in text.split_whitespace() {
        let wlen = word.chars().count();
        if len > 0 && len + 1 + wlen > measure {
            lines.push(std::mem::take(&mut line));
            len = 0;
        }
        if len > 0 {
            line.push(' ');
            len += 1;
        }
        line.push_str(word);
        len += wlen;
    }
    if !line.is_empty() {
        lines.push(line);
    }
    lines
}

impl Page {
    pub fn build(width: u16, viewport_rows: u16) -> Page {
        let mut hero = Builder::new(width);
        hero.center(
            "ADSCRIPTLY      Features   Pricing   About   |   Log in   Get Started",
            Tone::Dim,
        );
        hero.blank(1);
        let header_rows = hero.rows.len();

        hero.center("[ $200k+ AD SPEND SAVED ]", Tone::Brand);
        hero.blank(1);
        hero.center("S T O P   W A S T I N G", Tone::Headline);
        hero.center("A D   S P E N D", Tone::Brand);
        hero.center("ON LOW-QUALITY LEADS", Tone::Accent);
        hero.blank(1);
        hero.para(
            "AI-driven automation that squeezes every dollar for stronger ROAS on Google & Meta.",
            Tone::Body,
        );
        hero.blank(1);
        hero.center("[ GET STARTED FOR FREE ]", Tone::Cta);
        hero.center("No Credit Card Required", Tone::Dim);

        // Blank spacer rows don't count as content; only laid-out text makes
        // the hero measurable.
        let measurable = hero.rows.iter().any(|r| !r.text.is_empty());
        let measured = hero.rows.len();
        let hero_rows = if !measurable {
            // Hero unmeasurable; cover a stretch of viewport heights instead.
            (viewport_rows as f32 * HERO_FALLBACK_FACTOR) as usize
        } else {
            // The hero fills at least one full viewport, like the original.
            measured.max(viewport_rows as usize)
        };

        let mut b = Builder::new(width);
        let content = hero.rows.split_off(header_rows);
        b.rows = hero.rows;
        b.blank((hero_rows.saturating_sub(measured)) / 2);
        b.rows.extend(content);
        b.blank(hero_rows.saturating_sub(b.rows.len()));

        Self::body_sections(&mut b);

        Page {
            rows: b.rows,
            hero_rows,
        }
    }

    fn body_sections(b: &mut Builder) {
        b.title("TRUSTED BY QUANTUM ENTERPRISES", Tone::Dim);
        b.center("NEXUS   QUANTUM   NEURAL   CYBER   MATRIX   SYNTH", Tone::Body);

        b.title("THE OLD WAY  VS  THE NEW WAY", Tone::Headline);

        b.center("-- The Broken System --", Tone::Warn);
        b.blank(1);
        b.para(
            "You're doing what Google tells you, optimizing for calls and form \
             fills while your clients' bottom-line CAC spirals out of control. \
             Google's algorithm is learning from the wrong signals.",
            Tone::Body,
        );
        b.para(
            "Your client asks why their $50K ad spend brought in 200 leads but \
             only generated three real customers.",
            Tone::Body,
        );
        b.blank(1);
        b.center("85%  Wasted Ad Spend", Tone::Warn);
        b.center("Industry average for unqualified leads", Tone::Dim);

        b.blank(2);
        b.center("-- Neural Solution --", Tone::Brand);
        b.blank(1);
        b.para(
            "Adscriptly creates a closed-loop attribution system that captures \
             post-click intent signals and pushes enhanced conversions back to \
             Google in real time, training Smart Bidding on SQLs and closed-won \
             deals, not just top-of-funnel noise.",
            Tone::Body,
        );
        b.para(
            "Your campaigns finally learn what a valuable customer looks like, \
             and find more of them.",
            Tone::Body,
        );
        b.blank(1);
        b.center("5x  Better ROAS", Tone::Brand);
        b.center("Average improvement with neural optimization", Tone::Dim);

        b.title("NEURAL COMMAND CENTER", Tone::Headline);
        b.para(
            "Advanced AI systems engineered for maximum campaign optimization \
             and ROI amplification.",
            Tone::Dim,
        );
        for (head, copy) in [
            (
                "Multi-Platform Neural Sync",
                "Integrate Google Ads, Meta, and TikTok campaigns through one \
                 unified neural interface.",
            ),
            (
                "Quantum Analytics Engine",
                "Monitor campaign performance with real-time neural insights \
                 across all channels.",
            ),
            (
                "Neural Performance Tracking",
                "Advanced AI monitoring without complex setup; campaign data \
                 analyzed and optimized automatically.",
            ),
            (
                "Neural No-Code Interface",
                "Build and optimize campaigns without technical expertise; the \
                 AI handles the complexity.",
            ),
        ] {
            b.blank(1);
            b.center(head, Tone::Accent);
            b.para(copy, Tone::Body);
        }

        b.title("QUANTUM FEATURES, NEURAL RESULTS", Tone::Headline);
        for (head, copy) in [
            (
                "Quantum AI Prediction Engine",
                "Neural networks analyze data patterns to predict optimal \
                 content performance.",
            ),
            (
                "Autonomous Bid Optimization",
                "Self-learning algorithms adjust bidding strategies in real \
                 time across platforms.",
            ),
            (
                "Neural Brand Intelligence",
                "AI that understands your brand and optimizes campaigns with \
                 human-like creativity.",
            ),
            (
                "Quantum Collaboration Matrix",
                "A shared workspace where teams collaborate across parallel \
                 campaign universes.",
            ),
            (
                "Neural Health Diagnostics",
                "Predictive analytics and quantum-level campaign insights, \
                 continuously monitored.",
            ),
            (
                "Instant Neural Deployment",
                "Zero-latency campaign activation with pre-trained neural \
                 networks.",
            ),
        ] {
            b.blank(1);
            b.center(head, Tone::Accent);
            b.para(copy, Tone::Body);
        }

        b.title("QUANTUM PRICING MATRIX", Tone::Headline);
        b.center("Choose your neural enhancement level", Tone::Dim);

        b.blank(2);
        b.center("NEURAL STARTER", Tone::Headline);
        b.center("$14 / cycle", Tone::Brand);
        b.center("Basic neural network access", Tone::Dim);
        b.blank(1);
        for item in [
            "Up to 5 neural campaigns",
            "Basic AI optimization",
            "Quantum support channel",
            "Standard analytics matrix",
            "1 neural operator",
        ] {
            b.center(item, Tone::Body);
        }
        b.blank(1);
        b.center("[ INITIATE NEURAL LINK ]", Tone::Cta);

        b.blank(2);
        b.center("NEURAL MATRIX  *quantum enhanced*", Tone::Headline);
        b.center("Custom neural pricing", Tone::Accent);
        b.center("Advanced quantum neural networks", Tone::Dim);
        b.blank(1);
        for item in [
            "Unlimited neural campaigns",
            "Quantum AI optimization",
            "Priority neural support",
            "Advanced quantum analytics",
            "Unlimited neural operators",
            "Neural API access",
        ] {
            b.center(item, Tone::Body);
        }
        b.blank(1);
        b.center("[ CONTACT NEURAL COMMAND ]", Tone::Cta);

        b.title("LET YOUR NEURAL NETWORK EVOLVE", Tone::Headline);
        b.para(
            "Join the quantum revolution. Thousands of neural networks already \
             optimizing campaigns in the digital multiverse.",
            Tone::Body,
        );
        b.blank(1);
        b.center("[ ACTIVATE NEURAL PROTOCOL ]", Tone::Cta);
        b.blank(1);
        b.center(
            "NO NEURAL IMPLANTS REQUIRED • 7-DAY QUANTUM TRIAL • CANCEL ANYTIME",
            Tone::Dim,
        );

        b.blank(3);
        b.center("ADSCRIPTLY", Tone::Brand);
        b.para(
            "Quantum AI-powered neural network system optimizing advertising \
             campaigns across the digital multiverse.",
            Tone::Dim,
        );
        b.blank(1);
        b.center(
            "Quantum Features | Neural Pricing | Quantum API | Neural Integrations",
            Tone::Dim,
        );
        b.center(
            "About Neural Corp | Quantum Blog | Neural Careers | Contact Matrix",
            Tone::Dim,
        );
        b.center(
            "Privacy Protocol | Neural Terms | Quantum Security | Data Cookies",
            Tone::Dim,
        );
        b.blank(1);
        b.center(
            "(c) 2100 AdScriptly Neural Corp. All quantum rights reserved.",
            Tone::Dim,
        );
        b.center("NEURAL_X   QUANTUM_IN   NEURAL_HUB", Tone::Dim);
        b.blank(1);
    }

    /// Rows the rain field covers, measured from the hero content (or the
    /// viewport fallback when the hero could not be measured).
    pub fn hero_rows(&self) -> usize {
        self.hero_rows
    }

    pub fn row(&self, i: usize) -> Option<&Row> {
        self.rows.get(i)
    }

    pub fn total_rows(&self) -> usize {
        self.rows.len()
    }

    pub fn max_scroll(&self, viewport_rows: u16) -> usize {
        self.rows.len().saturating_sub(viewport_rows as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hero_fills_at_least_the_viewport() {
        let page = Page::build(100, 40);
        assert!(page.hero_rows() >= 40);
        assert!(page.total_rows() > page.hero_rows());
    }

    #[test]
    fn unmeasurable_hero_falls_back_to_viewport_multiple() {
        let page = Page::build(0, 40);
        assert_eq!(page.hero_rows(), (40.0 * HERO_FALLBACK_FACTOR) as usize);
    }

    #[test]
    fn rows_fit_the_width() {
        let width = 60u16;
        let page = Page::build(width, 30);
        for i in 0..page.total_rows() {
            let row = page.row(i).unwrap();
            let len = row.text.chars().count() as u16;
            assert!(row.x + len <= width, "row {i} overflows: {:?}", row.text);
        }
    }

    #[test]
    fn wrap_respects_the_measure() {
        let lines = wrap(
            "AI-driven automation that squeezes every dollar for stronger ROAS",
            20,
        );
        assert!(lines.len() > 1);
        for l in &lines {
            assert!(l.chars().count() <= 20, "{l:?}");
        }
    }

    #[test]
    fn max_scroll_never_underflows() {
        let page = Page::build(80, 500);
        assert_eq!(page.max_scroll(10_000), 0);
    }
}
