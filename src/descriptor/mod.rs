//! In-memory typed model of the generated build descriptor
//!
//! The descriptor (`Gruntfile.js`) is parsed line by line into a typed model:
//! opaque text, the three insertion markers, task registrations
//! (`grunt.registerTask("name", [...])`), and the includes declaration
//! (`var includes = [...];`). Edits mutate the model through marker anchors
//! and named registrations; serialization reproduces every untouched line
//! byte-for-byte.
//!
//! A valid descriptor contains each marker exactly once. Any lookup that
//! fails to find a marker or an expected declaration is a fatal
//! [`RiggerError::DescriptorCorrupt`].

use std::sync::OnceLock;

use regex::Regex;

use crate::error::{Result, RiggerError};

pub mod patch;

pub const CONFIG_MARKER: &str = "//<rigger:config:insert>//";
pub const SUBTASK_MARKER: &str = "//<rigger:subtask:insert>//";
pub const TASK_MARKER: &str = "//<rigger:task:insert>//";

/// The three insertion anchors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    Config,
    Subtask,
    Task,
}

impl Marker {
    const ALL: [Marker; 3] = [Marker::Config, Marker::Subtask, Marker::Task];

    fn token(self) -> &'static str {
        match self {
            Marker::Config => CONFIG_MARKER,
            Marker::Subtask => SUBTASK_MARKER,
            Marker::Task => TASK_MARKER,
        }
    }

    fn describe(self) -> &'static str {
        match self {
            Marker::Config => "config insertion marker",
            Marker::Subtask => "subtask insertion marker",
            Marker::Task => "task insertion marker",
        }
    }
}

/// A task registration line: `grunt.registerTask("name", ["a", "b"]);`
#[derive(Debug, Clone)]
pub struct Registration {
    indent: String,
    pub name: String,
    pub tasks: Vec<String>,
    raw: String,
}

impl Registration {
    fn render(indent: &str, name: &str, tasks: &[String]) -> String {
        format!(
            "{}grunt.registerTask(\"{}\", {});",
            indent,
            name,
            json_strings(tasks)
        )
    }

    fn rerender(&mut self) {
        self.raw = Self::render(&self.indent, &self.name, &self.tasks);
    }
}

/// The includes declaration line: `var includes = ["**/*"];`
#[derive(Debug, Clone)]
struct IncludesDecl {
    indent: String,
    entries: Vec<String>,
    raw: String,
}

impl IncludesDecl {
    fn rerender(&mut self) {
        self.raw = format!("{}var includes = {};", self.indent, json_strings(&self.entries));
    }
}

#[derive(Debug, Clone)]
enum Line {
    Text(String),
    Marker { kind: Marker, raw: String },
    Registration(Registration),
    Includes(IncludesDecl),
}

impl Line {
    fn raw(&self) -> &str {
        match self {
            Line::Text(raw) => raw,
            Line::Marker { raw, .. } => raw,
            Line::Registration(reg) => &reg.raw,
            Line::Includes(decl) => &decl.raw,
        }
    }
}

// Serialization matches the original generator: JSON string arrays, no spaces.
fn json_strings(items: &[String]) -> String {
    let quoted: Vec<String> = items
        .iter()
        .map(|item| format!("\"{}\"", item.replace('\\', "\\\\").replace('"', "\\\"")))
        .collect();
    format!("[{}]", quoted.join(","))
}

fn registration_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r#"^(\s*)grunt\.registerTask\("([^"]+)",\s*(\[.*\])\);\s*$"#)
            .expect("registration pattern is valid")
    })
}

fn includes_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r#"^(\s*)var includes = (\[.*\]);\s*$"#).expect("includes pattern is valid")
    })
}

fn classify(raw: &str) -> Line {
    let trimmed = raw.trim();
    for kind in Marker::ALL {
        if trimmed == kind.token() {
            return Line::Marker {
                kind,
                raw: raw.to_string(),
            };
        }
    }

    if let Some(captures) = registration_re().captures(raw) {
        if let Ok(tasks) = serde_json::from_str::<Vec<String>>(&captures[3]) {
            return Line::Registration(Registration {
                indent: captures[1].to_string(),
                name: captures[2].to_string(),
                tasks,
                raw: raw.to_string(),
            });
        }
    }

    if let Some(captures) = includes_re().captures(raw) {
        if let Ok(entries) = serde_json::from_str::<Vec<String>>(&captures[2]) {
            return Line::Includes(IncludesDecl {
                indent: captures[1].to_string(),
                entries,
                raw: raw.to_string(),
            });
        }
    }

    Line::Text(raw.to_string())
}

/// The mutable pipeline descriptor
#[derive(Debug, Clone)]
pub struct Descriptor {
    lines: Vec<Line>,
}

impl Descriptor {
    /// Parse the descriptor text, validating that each of the three markers
    /// appears exactly once.
    pub fn parse(text: &str) -> Result<Self> {
        let lines: Vec<Line> = text.split('\n').map(classify).collect();
        let descriptor = Descriptor { lines };

        for kind in Marker::ALL {
            let count = descriptor
                .lines
                .iter()
                .filter(|line| matches!(line, Line::Marker { kind: k, .. } if *k == kind))
                .count();
            match count {
                1 => {}
                0 => return Err(corrupt(format!("missing {}", kind.describe()))),
                _ => return Err(corrupt(format!("duplicate {}", kind.describe()))),
            }
        }

        Ok(descriptor)
    }

    /// Serialize back to text. Untouched lines are reproduced byte-for-byte.
    pub fn to_text(&self) -> String {
        let raw: Vec<&str> = self.lines.iter().map(Line::raw).collect();
        raw.join("\n")
    }

    /// Look up a task registration by name
    pub fn registration(&self, name: &str) -> Option<&Registration> {
        self.lines.iter().find_map(|line| match line {
            Line::Registration(reg) if reg.name == name => Some(reg),
            _ => None,
        })
    }

    fn marker_position(&self, kind: Marker) -> Result<usize> {
        self.lines
            .iter()
            .position(|line| matches!(line, Line::Marker { kind: k, .. } if *k == kind))
            .ok_or_else(|| corrupt(format!("missing {}", kind.describe())))
    }

    fn marker_indent(&self, position: usize) -> String {
        let raw = self.lines[position].raw();
        raw[..raw.len() - raw.trim_start().len()].to_string()
    }

    /// Insert a new task registration immediately before the subtask marker
    pub fn insert_registration(&mut self, name: &str, tasks: &[String]) -> Result<()> {
        let position = self.marker_position(Marker::Subtask)?;
        let indent = self.marker_indent(position);
        let raw = Registration::render(&indent, name, tasks);
        self.lines.insert(
            position,
            Line::Registration(Registration {
                indent,
                name: name.to_string(),
                tasks: tasks.to_vec(),
                raw,
            }),
        );
        Ok(())
    }

    /// Insert a public task alias (`name -> [target]`) immediately before the
    /// task marker
    pub fn insert_alias(&mut self, name: &str, target: &str) -> Result<()> {
        let position = self.marker_position(Marker::Task)?;
        let indent = self.marker_indent(position);
        let raw = Registration::render(&indent, name, &[target.to_string()]);
        self.lines.insert(
            position,
            Line::Registration(Registration {
                indent,
                name: name.to_string(),
                tasks: vec![target.to_string()],
                raw,
            }),
        );
        Ok(())
    }

    /// Splice `task` into the named registration's sequence at `index`
    /// (clamped to the sequence length) and rewrite the line in place.
    pub fn insert_task(&mut self, registration: &str, index: usize, task: &str) -> Result<()> {
        let reg = self
            .lines
            .iter_mut()
            .find_map(|line| match line {
                Line::Registration(reg) if reg.name == registration => Some(reg),
                _ => None,
            })
            .ok_or_else(|| corrupt(format!("missing task registration \"{}\"", registration)))?;

        let index = index.min(reg.tasks.len());
        reg.tasks.insert(index, task.to_string());
        reg.rerender();
        Ok(())
    }

    /// Insert a merge call referencing the module's opaque config fragment
    /// immediately before the config marker
    pub fn insert_config_merge(&mut self, fragment: &str) -> Result<()> {
        let position = self.marker_position(Marker::Config)?;
        let indent = self.marker_indent(position);
        let merge = format!("merge(config, {});", fragment.trim_end());

        let mut insert_at = position;
        for (i, part) in merge.split('\n').enumerate() {
            let text = if i == 0 {
                format!("{}{}", indent, part)
            } else {
                part.to_string()
            };
            self.lines.insert(insert_at, Line::Text(text));
            insert_at += 1;
        }
        Ok(())
    }

    /// Append one negated pattern per exclude to the includes array,
    /// preserving existing entries and their order.
    pub fn append_excludes(&mut self, excludes: &[String]) -> Result<()> {
        let decl = self
            .lines
            .iter_mut()
            .find_map(|line| match line {
                Line::Includes(decl) => Some(decl),
                _ => None,
            })
            .ok_or_else(|| corrupt("missing includes declaration".to_string()))?;

        for exclude in excludes {
            decl.entries.push(format!("!{}", exclude));
        }
        decl.rerender();
        Ok(())
    }

    /// Current includes entries, in declaration order
    pub fn includes(&self) -> Option<&[String]> {
        self.lines.iter().find_map(|line| match line {
            Line::Includes(decl) => Some(decl.entries.as_slice()),
            _ => None,
        })
    }
}

fn corrupt(reason: String) -> RiggerError {
    RiggerError::DescriptorCorrupt { reason }
}
