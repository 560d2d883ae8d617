//! Replacement tables for LaTeX output
//!
//! Five base tables are compiled into perfect-hash maps. The two tables the
//! escapers actually consult, [`TEXT_MODE`] and [`MATH_MODE`], are layered
//! from the base tables on first use; when a key appears in more than one
//! layer the last layer wins.

use fxhash::FxHashMap;
use lazy_static::lazy_static;
use phf::phf_map;

/// Characters with syntactic meaning in LaTeX. Valid in every context,
/// including `\href` targets.
///
/// The backslash and tilde are not listed here: they are handled as
/// protected sequences by the mixed-mode escaper.
pub static RESERVED: phf::Map<char, &'static str> = phf_map! {
    '&' => "\\&",
    '%' => "\\%",
    '$' => "\\$",
    '#' => "\\#",
    '_' => "\\_",
    '{' => "\\{",
    '}' => "\\}",
    '^' => "\\^",
};

/// Substitutions that only make sense in running text.
///
/// Commands that end in a letter carry a trailing space so they do not
/// swallow the following word.
pub static TEXT_ONLY: phf::Map<char, &'static str> = phf_map! {
    // quotes
    '\u{2019}' => "'",
    '\u{2018}' => "`",
    '\u{201D}' => "''",
    '\u{201C}' => "``",
    // guillemets
    '\u{00BB}' => ">>",
    '\u{00AB}' => "<<",
    '\u{2026}' => "\\dots ",
    '\u{2013}' => "--",
    '\u{2014}' => "---",
    '\u{00A9}' => "\\textcopyright ",
    '\u{00AE}' => "\\textregistered ",
    '\u{2122}' => "\\texttrademark ",
    '<' => "\\textless ",
    '>' => "\\textgreater ",
    // no-break space, narrow no-break space, thin space
    '\u{00A0}' => "~",
    '\u{202F}' => "~",
    '\u{2009}' => "\\,",
};

/// Substitutions that need math mode.
pub static MATH_ONLY: phf::Map<char, &'static str> = phf_map! {
    '\u{00BD}' => "\\frac{1}{2}",
    '\u{2153}' => "\\frac{1}{3}",
    '\u{2154}' => "\\frac{2}{3}",
    '\u{00BC}' => "\\frac{1}{4}",
    '\u{2155}' => "\\frac{1}{5}",
    '\u{2156}' => "\\frac{2}{5}",
    '\u{2157}' => "\\frac{3}{5}",
    '\u{2158}' => "\\frac{4}{5}",
    '\u{2159}' => "\\frac{1}{6}",
    '\u{215A}' => "\\frac{5}{6}",
    '\u{2150}' => "\\frac{1}{7}",
    '\u{215B}' => "\\frac{1}{8}",
    '\u{215C}' => "\\frac{3}{8}",
    '\u{215D}' => "\\frac{5}{8}",
    '\u{215E}' => "\\frac{7}{8}",
    '\u{2151}' => "\\frac{1}{9}",
    '\u{2152}' => "\\frac{1}{10}",
    '\u{00B1}' => "\\pm",
    '\u{00D7}' => "\\times",
    '\u{22C6}' => "\\star",
    // Greek, upper case letters without a command fall back to Latin
    'Α' => "A",
    'α' => "\\alpha",
    'Β' => "B",
    'β' => "\\beta",
    'ß' => "\\beta",
    'Γ' => "\\Gamma",
    'γ' => "\\gamma",
    'Δ' => "\\Delta",
    '\u{2206}' => "\\Delta",
    'δ' => "\\delta",
    'Ε' => "E",
    'ε' => "\\epsilon",
    'Ζ' => "Z",
    'ζ' => "\\zeta",
    'Η' => "H",
    'η' => "\\eta",
    'Θ' => "\\Theta",
    'θ' => "\\theta",
    'ϑ' => "\\vartheta",
    'Ι' => "I",
    'ι' => "\\iota",
    'Κ' => "K",
    'κ' => "\\kappa",
    'Λ' => "\\Lambda",
    'λ' => "\\lambda",
    'Μ' => "M",
    'μ' => "\\mu",
    'Ν' => "N",
    'ν' => "\\nu",
    'Ξ' => "\\Xi",
    'ξ' => "\\xi",
    'Ο' => "O",
    'ο' => "o",
    'Π' => "\\Pi",
    'π' => "\\pi",
    'Ρ' => "P",
    'ρ' => "\\rho",
    'Σ' => "\\Sigma",
    'σ' => "\\sigma",
    'Τ' => "T",
    'τ' => "\\tau",
    'Υ' => "\\Upsilon",
    'υ' => "\\upsilon",
    'Φ' => "\\Phi",
    'ϕ' => "\\phi",
    'φ' => "\\varphi",
    'Χ' => "X",
    'χ' => "\\chi",
    'Ψ' => "\\Psi",
    'ψ' => "\\psi",
    'Ω' => "\\Omega",
    'ω' => "\\omega",
    // operators and relations
    '\u{2202}' => "\\partial",
    '\u{221E}' => "\\infty",
    '\u{221D}' => "\\propto",
    '\u{29DC}' => "\\iinfin",
    '\u{29DD}' => "\\tieinfty",
    '\u{267E}' => "\\acidfree",
    '\u{2248}' => "\\approx",
    '\u{2260}' => "\\neq",
    '\u{2265}' => "\\geq",
    '\u{2264}' => "\\leq",
    '\u{2022}' => "\\cdot",
};

/// Arrows, usable in either mode.
pub static ARROWS: phf::Map<char, &'static str> = phf_map! {
    '\u{2194}' => "\\leftrightarrow",
    '\u{21D4}' => "\\Leftrightarrow",
    '\u{2192}' => "\\rightarrow",
    '\u{21D2}' => "\\Rightarrow",
    '\u{2190}' => "\\leftarrow",
    '\u{21D0}' => "\\Leftarrow",
};

/// Sign characters and sub/superscripts, usable in either mode.
pub static SIGNS_AND_SCRIPTS: phf::Map<char, &'static str> = phf_map! {
    // minus, hyphen-minus, small and full-width hyphen-minus, full-width plus
    '\u{2212}' => "-",
    '-' => "-",
    '\u{FE63}' => "-",
    '\u{FF0D}' => "-",
    '\u{FF0B}' => "+",
    // subscripts
    '\u{2080}' => "\\textsubscript{0}",
    '\u{2081}' => "\\textsubscript{1}",
    '\u{2082}' => "\\textsubscript{2}",
    '\u{2083}' => "\\textsubscript{3}",
    '\u{2084}' => "\\textsubscript{4}",
    '\u{2085}' => "\\textsubscript{5}",
    '\u{2086}' => "\\textsubscript{6}",
    '\u{2087}' => "\\textsubscript{7}",
    '\u{2088}' => "\\textsubscript{8}",
    '\u{2089}' => "\\textsubscript{9}",
    '\u{208A}' => "\\textsubscript{+}",
    '\u{208B}' => "\\textsubscript{-}",
    '\u{208C}' => "\\textsubscript{=}",
    '\u{208D}' => "\\textsubscript{(}",
    '\u{208E}' => "\\textsubscript{)}",
    '\u{2099}' => "\\textsubscript{n}",
    // superscripts
    '\u{2070}' => "\\textsuperscript{0}",
    '\u{00B9}' => "\\textsuperscript{1}",
    '\u{00B2}' => "\\textsuperscript{2}",
    '\u{00B3}' => "\\textsuperscript{3}",
    '\u{2074}' => "\\textsuperscript{4}",
    '\u{2075}' => "\\textsuperscript{5}",
    '\u{2076}' => "\\textsuperscript{6}",
    '\u{2077}' => "\\textsuperscript{7}",
    '\u{2078}' => "\\textsuperscript{8}",
    '\u{2079}' => "\\textsuperscript{9}",
    '\u{22C5}' => "\\textsuperscript{.}",
    '\u{207A}' => "\\textsuperscript{+}",
    '\u{207B}' => "\\textsuperscript{-}",
    '\u{207C}' => "\\textsuperscript{=}",
    '\u{207D}' => "\\textsuperscript{(}",
    '\u{207E}' => "\\textsuperscript{)}",
    '\u{207F}' => "\\textsuperscript{n}",
    '\u{2071}' => "\\textsuperscript{i}",
};

/// Build a lookup table by inserting `layers` in order. Later layers
/// override earlier ones.
pub fn layer(layers: &[&phf::Map<char, &'static str>]) -> FxHashMap<char, &'static str> {
    let mut merged = FxHashMap::default();
    for table in layers {
        for (&k, &v) in table.entries() {
            merged.insert(k, v);
        }
    }
    merged
}

lazy_static! {
    /// Table consulted first by the mixed-mode escaper; matches stay in text.
    pub static ref TEXT_MODE: FxHashMap<char, &'static str> =
        layer(&[&RESERVED, &TEXT_ONLY, &ARROWS, &SIGNS_AND_SCRIPTS]);

    /// Table for characters that must be typeset in math mode.
    pub static ref MATH_MODE: FxHashMap<char, &'static str> =
        layer(&[&ARROWS, &SIGNS_AND_SCRIPTS, &MATH_ONLY]);
}
