//! Implementation plan for the tabbed invoice interface.
//!
//! The plan is plain data ([`Plan`]) rendered by [`render_plan`]. Nothing in
//! it depends on program state; it is guidance for whoever applies the
//! frontend changes by hand.

use std::fmt;
use std::io::{self, Write};

use crate::types::InvoiceTab;

const INDENT: &str = "    ";

/// A numbered plan phase, optionally carrying its steps
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Phase {
    pub number: usize,
    pub name: &'static str,
    /// Shown in parentheses after the name, e.g. "✅ COMPLETE"
    pub status: Option<&'static str>,
    pub items: Vec<&'static str>,
    pub steps: Vec<Step>,
}

/// One structural edit, anchored to an approximate line in the page source
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub number: usize,
    pub title: &'static str,
    /// Approximate location, e.g. "Line ~7" or "After line 23"
    pub anchor: &'static str,
    /// Number of `-` under the heading
    pub rule_len: usize,
    /// Body lines, printed verbatim
    pub body: Vec<&'static str>,
}

/// Checklist of features that belong on one tab
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeatureTab {
    pub tab: InvoiceTab,
    pub items: Vec<&'static str>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plan {
    pub title: &'static str,
    /// Number of `=` under the title
    pub title_rule_len: usize,
    pub features_rule_len: usize,
    pub enhancements_rule_len: usize,
    pub phases: Vec<Phase>,
    pub features: Vec<FeatureTab>,
    pub enhancements: Vec<&'static str>,
}

impl Plan {
    /// The plan for moving the invoice create page to three tabs.
    pub fn invoice_tabs() -> Self {
        Self {
            title: "📋 IMPLEMENTATION PLAN FOR TABBED INVOICE INTERFACE",
            title_rule_len: 51,
            features_rule_len: 21,
            enhancements_rule_len: 25,
            phases: vec![
                Phase {
                    number: 1,
                    name: "Backend",
                    status: Some("✅ COMPLETE"),
                    items: vec![
                        "Added signatureEnabled, notesEnabled, termsEnabled fields to invoice model",
                        "Updated TypeScript interfaces",
                    ],
                    steps: Vec::new(),
                },
                Phase {
                    number: 2,
                    name: "Frontend Changes Required",
                    status: None,
                    items: Vec::new(),
                    steps: frontend_steps(),
                },
            ],
            features: vec![
                FeatureTab {
                    tab: InvoiceTab::CreateInvoice,
                    items: vec![
                        "Design selection (templates & colors)",
                        "Invoice details (number, dates)",
                        "Customer information",
                        "Invoice items table",
                    ],
                },
                FeatureTab {
                    tab: InvoiceTab::SignatureSettings,
                    items: vec![
                        "Enable/Disable toggle",
                        "Signature pad",
                        "Signature name input",
                        "Professional info card",
                    ],
                },
                FeatureTab {
                    tab: InvoiceTab::NotesAndTerms,
                    items: vec![
                        "Two cards side-by-side",
                        "Enable/Disable toggles for each",
                        "Text areas with professional styling",
                        "Quick suggestion buttons",
                        "Default text on enable",
                        "Professional tips",
                    ],
                },
            ],
            enhancements: vec![
                "Beautiful gradient backgrounds",
                "Professional color schemes",
                "Smooth animations",
                "Responsive design",
                "Clear visual hierarchy",
                "Helpful suggestions",
                "Professional default text",
                "Toggle switches for features",
            ],
        }
    }

    /// Total number of steps across all phases
    pub fn step_count(&self) -> usize {
        self.phases.iter().map(|p| p.steps.len()).sum()
    }
}

fn frontend_steps() -> Vec<Step> {
    vec![
        Step {
            number: 1,
            title: "Add Imports",
            anchor: "Line ~7",
            rule_len: 31,
            body: vec![
                "import { Tabs, TabsContent, TabsList, TabsTrigger } from '@/components/ui/tabs';",
                "import { Switch } from '@/components/ui/switch';",
                "import { PenTool, StickyNote, Shield, FileSignature } from 'lucide-react';",
            ],
        },
        Step {
            number: 2,
            title: "Add Constants",
            anchor: "After line 23",
            rule_len: 38,
            body: vec![
                "- DEFAULT_NOTES",
                "- DEFAULT_TERMS",
                "- NOTES_SUGGESTIONS array",
                "- TERMS_SUGGESTIONS array",
            ],
        },
        Step {
            number: 3,
            title: "Add State",
            anchor: "Line ~30",
            rule_len: 28,
            body: vec!["const [activeTab, setActiveTab] = useState('invoice');"],
        },
        Step {
            number: 4,
            title: "Update formData initial state",
            anchor: "Line ~30-56",
            rule_len: 51,
            body: vec!["Add: notesEnabled: false, termsEnabled: false, signatureEnabled: false"],
        },
        Step {
            number: 5,
            title: "Add Helper Function",
            anchor: "After line 227",
            rule_len: 44,
            body: vec!["applySuggestion function for quick text insertion"],
        },
        Step {
            number: 6,
            title: "Replace Main UI",
            anchor: "Line ~267 onwards",
            rule_len: 43,
            body: vec![
                "- Wrap everything in <Tabs> component",
                "- Create 3 tab triggers",
                "- Move existing invoice content to Tab 1",
                "- Create new Tab 2 for Signature",
                "- Create new Tab 3 for Notes & Terms",
                "- Remove old signature and notes/terms cards from Tab 1",
            ],
        },
    ]
}

fn line(f: &mut fmt::Formatter<'_>, text: &str) -> fmt::Result {
    writeln!(f, "{INDENT}{text}")
}

fn heading(
    f: &mut fmt::Formatter<'_>,
    text: &str,
    rule: char,
    rule_len: usize,
) -> fmt::Result {
    line(f, text)?;
    line(f, &rule.to_string().repeat(rule_len))
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let title = match self.status {
            Some(status) => format!("PHASE {}: {} ({})", self.number, self.name, status),
            None => format!("PHASE {}: {}", self.number, self.name),
        };
        line(f, &title)?;
        for item in &self.items {
            line(f, &format!("- {item}"))?;
        }
        for step in &self.steps {
            writeln!(f)?;
            write!(f, "{step}")?;
        }
        Ok(())
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        heading(
            f,
            &format!("Step {}: {} ({})", self.number, self.title, self.anchor),
            '-',
            self.rule_len,
        )?;
        for body_line in &self.body {
            line(f, body_line)?;
        }
        Ok(())
    }
}

impl fmt::Display for FeatureTab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        line(f, &format!("✨ Tab {}: {}", self.tab.number(), self.tab))?;
        for item in &self.items {
            line(f, &format!("   - {item}"))?;
        }
        Ok(())
    }
}

impl fmt::Display for Plan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f)?;
        heading(f, self.title, '=', self.title_rule_len)?;

        for phase in &self.phases {
            writeln!(f)?;
            write!(f, "{phase}")?;
        }

        writeln!(f)?;
        heading(f, "FEATURES TO IMPLEMENT:", '=', self.features_rule_len)?;
        for (i, feature) in self.features.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{feature}")?;
        }

        writeln!(f)?;
        heading(f, "PROFESSIONAL ENHANCEMENTS:", '=', self.enhancements_rule_len)?;
        for enhancement in &self.enhancements {
            line(f, &format!("✅ {enhancement}"))?;
        }
        Ok(())
    }
}

/// Write `plan` to `out`.
pub fn render_plan<W: Write>(plan: &Plan, out: &mut W) -> io::Result<()> {
    write!(out, "{plan}")
}

/// Print the invoice tabs plan to stdout.
pub fn print_plan() -> io::Result<()> {
    let stdout = io::stdout();
    render_plan(&Plan::invoice_tabs(), &mut stdout.lock())
}
