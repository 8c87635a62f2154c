//! Bounded backtracking matcher.
//!
//! Patterns are parsed with `fancy-regex` into an expression tree that keeps
//! backreferences, lookaround and atomic groups, and compiled to a small
//! instruction program that is executed by a classic depth-first
//! backtracker: alternatives are tried in preference order and nothing is
//! memoized, so ambiguous quantifier nesting costs exponential time exactly
//! like a recursive engine would. Character classes and escapes are handed
//! to `regex-syntax`. Every executed instruction counts as one step and
//! execution aborts once a step budget is spent.

use fancy_regex::{Assertion as ExprAssertion, Expr, LookAround};
use regex_syntax::ParserBuilder;
use regex_syntax::hir::{Class, Hir, HirKind};

/// Largest program the compiler will emit.
pub const MAX_PROGRAM_LEN: usize = 100_000;

/// One backtracking instruction.
#[derive(Debug, Clone, PartialEq)]
enum Inst {
    /// Consume exactly this character.
    Char(char),
    /// Consume one character inside any of these sorted, disjoint ranges.
    Ranges(Vec<(char, char)>),
    /// Try `primary`; on failure resume at `secondary`.
    Split { primary: usize, secondary: usize },
    Jmp(usize),
    /// Zero-width assertion.
    Assert(Assertion),
    /// Record the current position in a loop slot.
    Mark(usize),
    /// Fail unless the position advanced past the loop slot.
    Progress(usize),
    /// Record the current position in a capture slot.
    Save(usize),
    /// Consume the text captured between slots `start` and `start + 1`.
    Backref(usize),
    /// Run the sub-program that follows as a nested search, then continue
    /// at `next`.
    LookStart { kind: LookKind, next: usize },
    /// End of a nested sub-program.
    LookEnd,
    Match,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LookKind {
    Ahead,
    NotAhead,
    /// Fixed-width lookbehind.
    Behind(usize),
    NotBehind(usize),
    /// Atomic group: first match of the body, never revisited.
    Atomic,
}

impl LookKind {
    fn is_positive(self) -> bool {
        matches!(self, LookKind::Ahead | LookKind::Behind(_) | LookKind::Atomic)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Assertion {
    Start,
    /// End of text, or just before a final newline.
    End,
    StartLine,
    EndLine,
    WordBoundary,
    NotWordBoundary,
    WordStart,
    WordEnd,
}

/// Errors raised while compiling a pattern.
#[derive(Debug, thiserror::Error)]
pub enum CompileError {
    #[error("Pattern failed to parse: {0}")]
    Syntax(#[from] fancy_regex::Error),
    #[error("Character class failed to parse: {0}")]
    Class(#[from] Box<regex_syntax::Error>),
    #[error("Unsupported construct: {0}")]
    Unsupported(String),
    #[error("Compiled program exceeds {MAX_PROGRAM_LEN} instructions")]
    TooLarge,
}

/// Result of a bounded search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Matched { steps: u64 },
    NoMatch { steps: u64 },
    /// The step budget ran out before the search finished.
    Exhausted,
}

impl Outcome {
    /// Steps spent, saturating at `budget` for an exhausted search.
    pub fn steps(self, budget: u64) -> u64 {
        match self {
            Outcome::Matched { steps } | Outcome::NoMatch { steps } => steps,
            Outcome::Exhausted => budget,
        }
    }
}

/// A compiled backtracking program.
#[derive(Debug, Clone)]
pub struct Program {
    insts: Vec<Inst>,
    slots: usize,
}

impl Program {
    /// Parse and compile a pattern.
    pub fn compile(pattern: &str) -> Result<Self, CompileError> {
        let tree = Expr::parse_tree(pattern)?;

        let groups = count_groups(&tree.expr);
        let mut compiler = Compiler {
            insts: Vec::new(),
            groups,
            next_group: 0,
            slots: 2 * groups,
        };
        compiler.emit(&tree.expr)?;
        compiler.push(Inst::Match)?;

        Ok(Self {
            insts: compiler.insts,
            slots: compiler.slots,
        })
    }

    /// Number of instructions in the program.
    pub(crate) fn len(&self) -> usize {
        self.insts.len()
    }

    /// Leftmost unanchored search over `text`, trying every start position
    /// in turn, spending at most `budget` steps in total.
    pub fn search(&self, text: &str, budget: u64) -> Outcome {
        let text: Vec<char> = text.chars().collect();
        let mut exec = Exec {
            program: self,
            text: &text,
            slots: vec![usize::MAX; self.slots],
            steps: 0,
            budget,
        };

        for start in 0..=text.len() {
            match exec.run(0, start) {
                Err(Exhausted) => return Outcome::Exhausted,
                Ok(Some(_)) => return Outcome::Matched { steps: exec.steps },
                Ok(None) => {}
            }
        }

        Outcome::NoMatch { steps: exec.steps }
    }
}

/// The step budget ran out.
struct Exhausted;

enum Job {
    Thread { pc: usize, pos: usize },
    Restore { slot: usize, value: usize },
}

struct Exec<'p> {
    program: &'p Program,
    text: &'p [char],
    slots: Vec<usize>,
    steps: u64,
    budget: u64,
}

impl Exec<'_> {
    fn tick(&mut self, cost: u64) -> Result<(), Exhausted> {
        self.steps += cost;
        if self.steps >= self.budget {
            Err(Exhausted)
        } else {
            Ok(())
        }
    }

    /// Backtrack from `pc` at `pos` until `Match` or `LookEnd` is reached.
    ///
    /// Returns the end position of the first success. A failed run leaves
    /// every slot as it found it.
    fn run(&mut self, pc: usize, pos: usize) -> Result<Option<usize>, Exhausted> {
        let program = self.program;
        let text = self.text;
        let mut stack = vec![Job::Thread { pc, pos }];

        while let Some(job) = stack.pop() {
            let (mut pc, mut pos) = match job {
                Job::Restore { slot, value } => {
                    self.slots[slot] = value;
                    continue;
                }
                Job::Thread { pc, pos } => (pc, pos),
            };

            loop {
                self.tick(1)?;

                match &program.insts[pc] {
                    Inst::Char(c) => {
                        if pos < text.len() && text[pos] == *c {
                            pc += 1;
                            pos += 1;
                        } else {
                            break;
                        }
                    }
                    Inst::Ranges(ranges) => {
                        if pos < text.len() && in_ranges(ranges, text[pos]) {
                            pc += 1;
                            pos += 1;
                        } else {
                            break;
                        }
                    }
                    Inst::Split { primary, secondary } => {
                        stack.push(Job::Thread {
                            pc: *secondary,
                            pos,
                        });
                        pc = *primary;
                    }
                    Inst::Jmp(target) => pc = *target,
                    Inst::Assert(assertion) => {
                        if assertion.holds(text, pos) {
                            pc += 1;
                        } else {
                            break;
                        }
                    }
                    Inst::Mark(slot) | Inst::Save(slot) => {
                        stack.push(Job::Restore {
                            slot: *slot,
                            value: self.slots[*slot],
                        });
                        self.slots[*slot] = pos;
                        pc += 1;
                    }
                    Inst::Progress(slot) => {
                        if self.slots[*slot] == pos {
                            break;
                        }
                        pc += 1;
                    }
                    Inst::Backref(start) => {
                        let (from, to) = (self.slots[*start], self.slots[*start + 1]);
                        if from == usize::MAX || to == usize::MAX || to < from {
                            break;
                        }
                        let len = to - from;
                        if pos + len > text.len() || text[from..to] != text[pos..pos + len] {
                            break;
                        }
                        self.tick(len as u64)?;
                        pc += 1;
                        pos += len;
                    }
                    Inst::LookStart { kind, next } => {
                        let saved = self.slots.clone();
                        let found = match kind {
                            LookKind::Behind(width) | LookKind::NotBehind(width) => {
                                match pos.checked_sub(*width) {
                                    Some(from) => self.run(pc + 1, from)?,
                                    None => None,
                                }
                            }
                            _ => self.run(pc + 1, pos)?,
                        };

                        match (found, kind.is_positive()) {
                            (Some(end), true) => {
                                // Captures made inside the body are undone on backtrack
                                for (slot, (&old, &new)) in saved.iter().zip(&self.slots).enumerate()
                                {
                                    if old != new {
                                        stack.push(Job::Restore { slot, value: old });
                                    }
                                }
                                if *kind == LookKind::Atomic {
                                    pos = end;
                                }
                                pc = *next;
                            }
                            (None, false) => pc = *next,
                            (Some(_), false) => {
                                self.slots = saved;
                                break;
                            }
                            (None, true) => break,
                        }
                    }
                    Inst::LookEnd | Inst::Match => return Ok(Some(pos)),
                }
            }
        }

        Ok(None)
    }
}

fn in_ranges(ranges: &[(char, char)], c: char) -> bool {
    ranges
        .binary_search_by(|&(lo, hi)| {
            if hi < c {
                std::cmp::Ordering::Less
            } else if lo > c {
                std::cmp::Ordering::Greater
            } else {
                std::cmp::Ordering::Equal
            }
        })
        .is_ok()
}

fn is_word(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

impl Assertion {
    fn holds(self, text: &[char], pos: usize) -> bool {
        let before = pos.checked_sub(1).map(|i| text[i]);
        let after = text.get(pos).copied();
        let word_before = before.is_some_and(is_word);
        let word_after = after.is_some_and(is_word);

        match self {
            Assertion::Start => pos == 0,
            Assertion::End => pos == text.len() || (pos + 1 == text.len() && text[pos] == '\n'),
            Assertion::StartLine => before.is_none_or(|c| c == '\n'),
            Assertion::EndLine => after.is_none_or(|c| c == '\n'),
            Assertion::WordBoundary => word_before != word_after,
            Assertion::NotWordBoundary => word_before == word_after,
            Assertion::WordStart => !word_before && word_after,
            Assertion::WordEnd => word_before && !word_after,
        }
    }

    fn from_expr(assertion: &ExprAssertion) -> Result<Self, CompileError> {
        let converted = match assertion {
            ExprAssertion::StartText => Assertion::Start,
            ExprAssertion::EndText => Assertion::End,
            ExprAssertion::StartLine { .. } => Assertion::StartLine,
            ExprAssertion::EndLine { .. } => Assertion::EndLine,
            ExprAssertion::WordBoundary => Assertion::WordBoundary,
            ExprAssertion::NotWordBoundary => Assertion::NotWordBoundary,
            ExprAssertion::LeftWordBoundary => Assertion::WordStart,
            ExprAssertion::RightWordBoundary => Assertion::WordEnd,
            #[allow(unreachable_patterns)]
            other => return Err(CompileError::Unsupported(format!("{:?}", other))),
        };
        Ok(converted)
    }
}

/// Capturing groups in `expr`, counted once per group in the source.
fn count_groups(expr: &Expr) -> usize {
    match expr {
        Expr::Group(inner) => 1 + count_groups(inner),
        Expr::Concat(children) | Expr::Alt(children) => children.iter().map(count_groups).sum(),
        Expr::LookAround(inner, _) | Expr::AtomicGroup(inner) => count_groups(inner),
        Expr::Repeat { child, .. } => count_groups(child),
        _ => 0,
    }
}

/// Characters matched by `expr` when that number is fixed.
fn fixed_width(expr: &Expr) -> Option<usize> {
    match expr {
        Expr::Empty | Expr::Assertion(_) | Expr::LookAround(..) => Some(0),
        Expr::Any { .. } => Some(1),
        Expr::Literal { val, .. } => Some(val.chars().count()),
        Expr::Delegate { size, .. } => Some(*size),
        Expr::Group(inner) | Expr::AtomicGroup(inner) => fixed_width(inner),
        Expr::Concat(children) => children.iter().map(fixed_width).sum(),
        Expr::Alt(children) => {
            let mut widths = children.iter().map(fixed_width);
            let first = widths.next()??;
            widths.all(|w| w == Some(first)).then_some(first)
        }
        Expr::Repeat { child, lo, hi, .. } if lo == hi => fixed_width(child).map(|w| w * lo),
        _ => None,
    }
}

struct Compiler {
    insts: Vec<Inst>,
    groups: usize,
    next_group: usize,
    slots: usize,
}

impl Compiler {
    fn push(&mut self, inst: Inst) -> Result<usize, CompileError> {
        if self.insts.len() >= MAX_PROGRAM_LEN {
            return Err(CompileError::TooLarge);
        }
        self.insts.push(inst);
        Ok(self.insts.len() - 1)
    }

    /// Emit a split whose targets are patched later.
    fn push_split(&mut self) -> Result<usize, CompileError> {
        self.push(Inst::Split {
            primary: 0,
            secondary: 0,
        })
    }

    fn patch_split(&mut self, at: usize, taken: usize, skipped: usize, greedy: bool) {
        let (primary, secondary) = if greedy {
            (taken, skipped)
        } else {
            (skipped, taken)
        };
        self.insts[at] = Inst::Split { primary, secondary };
    }

    fn patch_jmp(&mut self, at: usize, target: usize) {
        self.insts[at] = Inst::Jmp(target);
    }

    fn emit(&mut self, expr: &Expr) -> Result<(), CompileError> {
        match expr {
            Expr::Empty => {}
            Expr::Any { newline, .. } => {
                let ranges = if *newline {
                    vec![('\0', char::MAX)]
                } else {
                    vec![('\0', '\t'), ('\u{b}', char::MAX)]
                };
                self.push(Inst::Ranges(ranges))?;
            }
            Expr::Assertion(assertion) => {
                self.push(Inst::Assert(Assertion::from_expr(assertion)?))?;
            }
            Expr::Literal { val, casei, .. } => {
                if *casei {
                    self.emit_class(&regex_syntax::escape(val), true)?;
                } else {
                    for c in val.chars() {
                        self.push(Inst::Char(c))?;
                    }
                }
            }
            Expr::Delegate { inner, casei, .. } => self.emit_class(inner, *casei)?,
            Expr::Concat(children) => {
                for child in children {
                    self.emit(child)?;
                }
            }
            Expr::Alt(alternatives) => self.emit_alternation(alternatives)?,
            Expr::Group(inner) => {
                let slot = 2 * self.next_group;
                self.next_group += 1;
                self.push(Inst::Save(slot))?;
                self.emit(inner)?;
                self.push(Inst::Save(slot + 1))?;
            }
            Expr::Backref(group) => {
                if *group == 0 || *group > self.groups {
                    return Err(CompileError::Unsupported(format!(
                        "reference to undefined group {group}"
                    )));
                }
                self.push(Inst::Backref(2 * (group - 1)))?;
            }
            Expr::LookAround(inner, look) => {
                let kind = match look {
                    LookAround::LookAhead => LookKind::Ahead,
                    LookAround::LookAheadNeg => LookKind::NotAhead,
                    behind => {
                        let width = fixed_width(inner).ok_or_else(|| {
                            CompileError::Unsupported("variable-width lookbehind".to_string())
                        })?;
                        if matches!(behind, LookAround::LookBehind) {
                            LookKind::Behind(width)
                        } else {
                            LookKind::NotBehind(width)
                        }
                    }
                };
                self.emit_sub(inner, kind)?;
            }
            Expr::AtomicGroup(inner) => self.emit_sub(inner, LookKind::Atomic)?,
            Expr::Repeat {
                child,
                lo,
                hi,
                greedy,
                ..
            } => self.emit_repetition(child, *lo, *hi, *greedy)?,
            other => return Err(CompileError::Unsupported(format!("{:?}", other))),
        }
        Ok(())
    }

    /// `LookStart`, the body, `LookEnd`; the start jumps past the body.
    fn emit_sub(&mut self, body: &Expr, kind: LookKind) -> Result<(), CompileError> {
        let start = self.push(Inst::LookStart { kind, next: 0 })?;
        self.emit(body)?;
        self.push(Inst::LookEnd)?;
        let next = self.insts.len();
        self.insts[start] = Inst::LookStart { kind, next };
        Ok(())
    }

    /// Compile a class or escape through `regex-syntax`.
    fn emit_class(&mut self, source: &str, casei: bool) -> Result<(), CompileError> {
        let hir = ParserBuilder::new()
            .case_insensitive(casei)
            .build()
            .parse(source)
            .map_err(Box::new)?;
        self.emit_hir(&hir)
    }

    fn emit_hir(&mut self, hir: &Hir) -> Result<(), CompileError> {
        match hir.kind() {
            HirKind::Empty => {}
            HirKind::Literal(literal) => {
                let text = std::str::from_utf8(&literal.0).map_err(|_| {
                    CompileError::Unsupported("non-UTF-8 literal".to_string())
                })?;
                for c in text.chars() {
                    self.push(Inst::Char(c))?;
                }
            }
            HirKind::Class(Class::Unicode(class)) => {
                let ranges = class.ranges().iter().map(|r| (r.start(), r.end())).collect();
                self.push(Inst::Ranges(ranges))?;
            }
            HirKind::Class(Class::Bytes(class)) => {
                let ranges = class
                    .ranges()
                    .iter()
                    .map(|r| (char::from(r.start()), char::from(r.end())))
                    .collect();
                self.push(Inst::Ranges(ranges))?;
            }
            HirKind::Concat(subs) => {
                for sub in subs {
                    self.emit_hir(sub)?;
                }
            }
            other => return Err(CompileError::Unsupported(format!("{:?}", other))),
        }
        Ok(())
    }

    fn emit_alternation(&mut self, alternatives: &[Expr]) -> Result<(), CompileError> {
        let mut exits = Vec::with_capacity(alternatives.len());

        for (i, alternative) in alternatives.iter().enumerate() {
            if i + 1 == alternatives.len() {
                self.emit(alternative)?;
            } else {
                let split = self.push_split()?;
                self.emit(alternative)?;
                exits.push(self.push(Inst::Jmp(0))?);
                let next = self.insts.len();
                self.patch_split(split, split + 1, next, true);
            }
        }

        let end = self.insts.len();
        for exit in exits {
            self.patch_jmp(exit, end);
        }
        Ok(())
    }

    /// Every copy of `child` shares the group numbers of the source.
    fn emit_repetition(
        &mut self,
        child: &Expr,
        lo: usize,
        hi: usize,
        greedy: bool,
    ) -> Result<(), CompileError> {
        let first_group = self.next_group;
        let copy = |compiler: &mut Self| {
            compiler.next_group = first_group;
            compiler.emit(child)
        };

        for _ in 0..lo {
            copy(self)?;
        }

        if hi == usize::MAX {
            // loop: split body, exit; body: mark; child; progress; jmp loop
            let slot = self.slots;
            self.slots += 1;

            let split = self.push_split()?;
            self.push(Inst::Mark(slot))?;
            copy(self)?;
            self.push(Inst::Progress(slot))?;
            self.push(Inst::Jmp(split))?;
            let exit = self.insts.len();
            self.patch_split(split, split + 1, exit, greedy);
        } else {
            let mut splits = Vec::new();
            for _ in lo..hi {
                splits.push(self.push_split()?);
                copy(self)?;
            }
            let exit = self.insts.len();
            for split in splits {
                self.patch_split(split, split + 1, exit, greedy);
            }
        }

        self.next_group = first_group + count_groups(child);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BUDGET: u64 = 10_000_000;

    fn is_match(pattern: &str, text: &str) -> bool {
        let program = Program::compile(pattern).unwrap();
        matches!(program.search(text, BUDGET), Outcome::Matched { .. })
    }

    fn steps(pattern: &str, text: &str) -> u64 {
        Program::compile(pattern)
            .unwrap()
            .search(text, BUDGET)
            .steps(BUDGET)
    }

    #[test]
    fn test_literals_and_classes() {
        assert!(is_match("abc", "xxabcxx"));
        assert!(!is_match("abc", "abx"));
        assert!(is_match("^[a-z]+$", "hello"));
        assert!(!is_match("^[a-z]+$", "Hello"));
        assert!(is_match(r"\d{3}", "ab123"));
        assert!(!is_match(r"^\d{3}$", "12"));
        assert!(is_match("(?i)^abc$", "AbC"));
        assert!(!is_match("^a.c$", "a\nc"));
    }

    #[test]
    fn test_alternation_and_counted_repetition() {
        assert!(is_match("^(cat|dog|bird)$", "dog"));
        assert!(!is_match("^(cat|dog|bird)$", "cow"));
        assert!(is_match("^a{2,4}$", "aaa"));
        assert!(!is_match("^a{2,4}$", "aaaaa"));
        assert!(is_match("^a{2,}$", "aaaaa"));
    }

    #[test]
    fn test_lazy_repetition() {
        assert!(is_match("^a+?b$", "aaab"));
        assert!(is_match("h.*?j", "hxxj"));
    }

    #[test]
    fn test_anchors_and_word_boundaries() {
        assert!(is_match(r"\bfoo\b", "a foo b"));
        assert!(!is_match(r"\bfoo\b", "afoob"));
        assert!(is_match("(?m)^b$", "a\nb\nc"));
        assert!(!is_match("^b$", "a\nb\nc"));
    }

    #[test]
    fn test_dollar_allows_final_newline() {
        assert!(is_match("^abc$", "abc\n"));
        assert!(!is_match("^abc$", "abc\n\n"));
        assert!(!is_match("^abc$", "abc\nx"));
    }

    #[test]
    fn test_backreferences() {
        assert!(is_match(r"^(a+)b\1$", "aabaa"));
        assert!(!is_match(r"^(a+)b\1$", "aaba"));
        assert!(is_match(r"(\w)\1", "xyzzy"));
        assert!(!is_match(r"(\w)\1", "xyz"));
        // group never participated
        assert!(!is_match(r"^(?:(a)|b)\1$", "b"));
    }

    #[test]
    fn test_backreference_inside_repetition() {
        assert!(!is_match(r"^(?:(ab)\1)+$", "ababab"));
        assert!(is_match(r"^(?:(ab)\1)+$", "abababab"));
    }

    #[test]
    fn test_lookahead() {
        assert!(is_match("^(?=hello)[a-z]{5}", "hello"));
        assert!(!is_match("^(?=hello)[a-z]{5}", "help!"));
        assert!(is_match("^(?!abc)[a-z]+$", "abd"));
        assert!(!is_match("^(?!abc)[a-z]+$", "abcd"));
    }

    #[test]
    fn test_lookbehind() {
        assert!(is_match("(?<=\\$)[0-9]+", "cost $42"));
        assert!(!is_match("(?<=\\$)[0-9]+", "cost 42"));
        assert!(is_match("(?<!x)y", "ay"));
        assert!(!is_match("^.(?<!x)y", "xy"));
    }

    #[test]
    fn test_lookahead_captures_feed_backreference() {
        assert!(is_match(r"^(?=(a+))\1b$", "aab"));
        assert!(!is_match(r"^(?=(a+))\1b$", "aac"));
    }

    #[test]
    fn test_atomic_group_does_not_backtrack() {
        assert!(is_match("^(?>a+)b$", "aaab"));
        assert!(!is_match("^(?>a+)a$", "aaaa"));
        assert!(is_match("^(?:a+)a$", "aaaa"));
    }

    #[test]
    fn test_nullable_loop_terminates() {
        assert!(is_match("^(a*)*b$", "b"));
        assert!(!is_match("^(a*)*b$", "c"));
        assert!(is_match("(|a)*x", "aax"));
    }

    #[test]
    fn test_nested_quantifier_is_exponential() {
        let short = steps("(a+)+$", &format!("{}!", "a".repeat(8)));
        let long = steps("(a+)+$", &format!("{}!", "a".repeat(16)));
        assert!(long > short * 100, "short={short} long={long}");
    }

    #[test]
    fn test_backreference_pattern_is_exponential() {
        let short = steps(r"^(a+)+\1$", &format!("{}!", "a".repeat(8)));
        let long = steps(r"^(a+)+\1$", &format!("{}!", "a".repeat(16)));
        assert!(long > short * 100, "short={short} long={long}");
    }

    #[test]
    fn test_linear_pattern_stays_cheap() {
        let cost = steps("^[a-z]+$", &format!("{}!", "a".repeat(64)));
        assert!(cost < 1_000, "cost={cost}");
    }

    #[test]
    fn test_budget_exhaustion() {
        let program = Program::compile("(a+)+$").unwrap();
        let outcome = program.search(&format!("{}!", "a".repeat(30)), 10_000);
        assert_eq!(outcome, Outcome::Exhausted);
        assert_eq!(outcome.steps(10_000), 10_000);
    }

    #[test]
    fn test_rejected_patterns() {
        assert!(matches!(Program::compile("(a"), Err(CompileError::Syntax(_))));
        assert!(matches!(
            Program::compile("(?<=a+)b"),
            Err(CompileError::Unsupported(_))
        ));
    }

    #[test]
    fn test_program_size_limit() {
        assert!(matches!(
            Program::compile("(a{1000}){1000}"),
            Err(CompileError::TooLarge)
        ));
        assert!(Program::compile("a{3}").unwrap().len() < 10);
    }
}
