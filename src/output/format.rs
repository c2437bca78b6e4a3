//! Rendering of sorted records into configuration snippets.

use crate::models::AddressRecord;
use std::str::FromStr;

/// Output syntax, selectable by name or by ordinal `0..=4`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// `10.0.0.0/24`, one per line
    #[default]
    OnePerLine,
    /// `10.0.0.0/24 10.0.1.0/24`
    SpaceDelimited,
    /// `network 10.0.0.0/24,` (F5 BigIP data group)
    F5BigIp,
    /// `allow 10.0.0.0/24;`
    NginxAllow,
    /// `Require ip 10.0.0.0/24`
    ApacheRequire,
}

impl OutputFormat {
    pub const ALL: [OutputFormat; 5] = [
        OutputFormat::OnePerLine,
        OutputFormat::SpaceDelimited,
        OutputFormat::F5BigIp,
        OutputFormat::NginxAllow,
        OutputFormat::ApacheRequire,
    ];

    /// Name accepted on the command line.
    pub fn name(self) -> &'static str {
        match self {
            OutputFormat::OnePerLine => "lines",
            OutputFormat::SpaceDelimited => "space",
            OutputFormat::F5BigIp => "f5",
            OutputFormat::NginxAllow => "nginx",
            OutputFormat::ApacheRequire => "apache",
        }
    }

    pub fn ordinal(self) -> u8 {
        self as u8
    }

    fn write_record(self, out: &mut String, record: &AddressRecord) {
        let line = match self {
            OutputFormat::OnePerLine | OutputFormat::SpaceDelimited => record.to_string(),
            OutputFormat::F5BigIp => format!("network {record},"),
            OutputFormat::NginxAllow => format!("allow {record};"),
            OutputFormat::ApacheRequire => format!("Require ip {record}"),
        };
        out.push_str(&line);
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl TryFrom<u8> for OutputFormat {
    type Error = String;

    fn try_from(ordinal: u8) -> Result<Self, Self::Error> {
        OutputFormat::ALL
            .get(ordinal as usize)
            .copied()
            .ok_or_else(|| format!("format ordinal {ordinal} out of range 0..=4"))
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().to_lowercase();
        if let Ok(ordinal) = s.parse::<u8>() {
            return OutputFormat::try_from(ordinal);
        }
        match s.as_str() {
            "lines" | "one-per-line" => Ok(OutputFormat::OnePerLine),
            "space" | "space-delimited" => Ok(OutputFormat::SpaceDelimited),
            "f5" | "bigip" | "f5-bigip" => Ok(OutputFormat::F5BigIp),
            "nginx" => Ok(OutputFormat::NginxAllow),
            "apache" => Ok(OutputFormat::ApacheRequire),
            _ => Err(format!(
                "unknown format '{s}', expected one of: {}",
                OutputFormat::ALL
                    .iter()
                    .map(|f| format!("{}({})", f.name(), f.ordinal()))
                    .collect::<Vec<String>>()
                    .join(", ")
            )),
        }
    }
}

/// Render sorted records in `format`.
///
/// Space-delimited output has no trailing separator; every other format ends
/// each record with a newline. No records renders as the empty string.
pub fn render(records: &[AddressRecord], format: OutputFormat) -> String {
    let mut out = String::new();
    for (i, record) in records.iter().enumerate() {
        if format == OutputFormat::SpaceDelimited {
            if i > 0 {
                out.push(' ');
            }
            format.write_record(&mut out, record);
        } else {
            format.write_record(&mut out, record);
            out.push('\n');
        }
    }
    out
}
