//! Declarative registration of benchmark cases.
//!
//! Each case pairs a stable key with a monomorphized driver, so callers pick
//! combinations by value while the timed loops stay fully generic. A
//! combination a container cannot serve is simply not registered.

use std::collections::{LinkedList, VecDeque};
use std::fmt;

use anyhow::{Result, ensure};
use tracing::{debug, info};

use crate::buffer::Word;
use crate::config::{MatrixConfig, SequenceConfig};
use crate::matrix::{
    self, Cell, Friendly, IndexStrategy, Read, ReadDependent, Unfriendly, WorkOp, Write, WriteDependent,
};
use crate::perf::harness::Throughput;
use crate::sequence::{
    self, Container, Element, LargeRecord, OrderedMultiSet, append_constant, append_then_sort, naive_sorted_insert,
    prepend_constant, sorted_insert,
};

pub type AccessFn = fn(&mut [Cell], usize, Cell) -> Cell;

/// Runs one workload over the input slice and returns the final length.
pub type SequenceFn = fn(&[Word]) -> usize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    Friendly,
    Unfriendly,
}

impl Strategy {
    pub const ALL: [Strategy; 2] = [Strategy::Friendly, Strategy::Unfriendly];

    pub fn name(self) -> &'static str {
        match self {
            Strategy::Friendly => Friendly::NAME,
            Strategy::Unfriendly => Unfriendly::NAME,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Read,
    ReadDependent,
    Write,
    WriteDependent,
}

impl Operation {
    pub const ALL: [Operation; 4] = [
        Operation::Read,
        Operation::ReadDependent,
        Operation::Write,
        Operation::WriteDependent,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Operation::Read => Read::NAME,
            Operation::ReadDependent => ReadDependent::NAME,
            Operation::Write => Write::NAME,
            Operation::WriteDependent => WriteDependent::NAME,
        }
    }

    pub fn mutates(self) -> bool {
        match self {
            Operation::Read => Read::MUTATES,
            Operation::ReadDependent => ReadDependent::MUTATES,
            Operation::Write => Write::MUTATES,
            Operation::WriteDependent => WriteDependent::MUTATES,
        }
    }
}

#[derive(Clone)]
pub struct MatrixCase {
    pub strategy: Strategy,
    pub operation: Operation,
    run: AccessFn,
}

impl MatrixCase {
    fn new<I: IndexStrategy, W: WorkOp>(strategy: Strategy, operation: Operation) -> Self {
        Self {
            strategy,
            operation,
            run: matrix::traverse::<I, W>,
        }
    }

    pub fn key(&self) -> String {
        format!("{}/{}", self.strategy.name(), self.operation.name())
    }

    /// One traversal of the leading `side x side` cells.
    #[inline]
    pub fn run(&self, cells: &mut [Cell], side: usize, acc: Cell) -> Cell {
        (self.run)(cells, side, acc)
    }
}

impl fmt::Debug for MatrixCase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MatrixCase").field("key", &self.key()).finish()
    }
}

fn matrix_case(strategy: Strategy, operation: Operation) -> MatrixCase {
    macro_rules! with_op {
        ($index:ty) => {
            match operation {
                Operation::Read => MatrixCase::new::<$index, Read>(strategy, operation),
                Operation::ReadDependent => MatrixCase::new::<$index, ReadDependent>(strategy, operation),
                Operation::Write => MatrixCase::new::<$index, Write>(strategy, operation),
                Operation::WriteDependent => MatrixCase::new::<$index, WriteDependent>(strategy, operation),
            }
        };
    }
    match strategy {
        Strategy::Friendly => with_op!(Friendly),
        Strategy::Unfriendly => with_op!(Unfriendly),
    }
}

/// Every (strategy, operation) pair, grouped by operation so friendly and
/// unfriendly runs of the same work sit next to each other.
pub fn matrix_cases() -> Vec<MatrixCase> {
    Operation::ALL
        .iter()
        .flat_map(|&op| Strategy::ALL.iter().map(move |&strategy| matrix_case(strategy, op)))
        .collect()
}

#[derive(Debug, Clone)]
pub struct MatrixPlan {
    pub sides: Vec<usize>,
    pub max_side: usize,
    pub write_value: Cell,
    pub cases: Vec<MatrixCase>,
}

impl MatrixPlan {
    pub fn new(config: &MatrixConfig) -> Result<Self> {
        config.validate()?;
        let plan = Self {
            sides: config.sides.clone(),
            max_side: config.max_side,
            write_value: config.write_value,
            cases: matrix_cases(),
        };
        info!(
            cases = plan.cases.len(),
            sides = plan.sides.len(),
            max_side = plan.max_side,
            "registered matrix benchmarks"
        );
        Ok(plan)
    }

    /// Cells the backing buffer must hold.
    pub fn required_len(&self) -> usize {
        self.max_side * self.max_side
    }

    pub fn filtered(mut self, filter: Option<&str>) -> Self {
        if let Some(filter) = filter {
            self.cases.retain(|case| case.key().contains(filter));
        }
        self
    }

    pub fn throughput(side: usize, iterations: u64) -> Throughput {
        matrix::access_throughput(side, iterations)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Workload {
    Append,
    Prepend,
    NaiveInsert,
    AppendThenSort,
    SortedInsert,
}

impl Workload {
    pub const ALL: [Workload; 5] = [
        Workload::Append,
        Workload::Prepend,
        Workload::NaiveInsert,
        Workload::AppendThenSort,
        Workload::SortedInsert,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Workload::Append => "append",
            Workload::Prepend => "prepend",
            Workload::NaiveInsert => "naive_insert",
            Workload::AppendThenSort => "append_then_sort",
            Workload::SortedInsert => "sorted_insert",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContainerKind {
    Vec,
    LinkedList,
    Deque,
    MultiSet,
}

impl ContainerKind {
    pub fn name(self) -> &'static str {
        match self {
            ContainerKind::Vec => <Vec<Word> as Container<Word>>::NAME,
            ContainerKind::LinkedList => <LinkedList<Word> as Container<Word>>::NAME,
            ContainerKind::Deque => <VecDeque<Word> as Container<Word>>::NAME,
            ContainerKind::MultiSet => <OrderedMultiSet<Word> as Container<Word>>::NAME,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementKind {
    Small,
    Large,
}

impl ElementKind {
    pub const ALL: [ElementKind; 2] = [ElementKind::Small, ElementKind::Large];

    pub fn name(self) -> &'static str {
        match self {
            ElementKind::Small => Word::NAME,
            ElementKind::Large => LargeRecord::NAME,
        }
    }

    pub fn width(self) -> usize {
        match self {
            ElementKind::Small => Word::width(),
            ElementKind::Large => LargeRecord::width(),
        }
    }
}

#[derive(Clone)]
pub struct SequenceCase {
    pub workload: Workload,
    pub container: ContainerKind,
    pub element: ElementKind,
    run: SequenceFn,
}

impl SequenceCase {
    pub fn key(&self) -> String {
        format!("{}/{}/{}", self.workload.name(), self.container.name(), self.element.name())
    }

    /// Runs the workload over `input`; the container is built and dropped
    /// inside the call.
    #[inline]
    pub fn run(&self, input: &[Word]) -> usize {
        (self.run)(input)
    }

    pub fn throughput(&self, count: usize, iterations: u64) -> Throughput {
        match self.element {
            ElementKind::Small => sequence::sequence_throughput::<Word>(count, iterations),
            ElementKind::Large => sequence::sequence_throughput::<LargeRecord>(count, iterations),
        }
    }
}

impl fmt::Debug for SequenceCase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SequenceCase").field("key", &self.key()).finish()
    }
}

fn run_append<C: sequence::Append<T>, T: Element>(input: &[Word]) -> usize {
    append_constant::<C, T>(input.len()).len()
}

fn run_prepend<C: sequence::Prepend<T>, T: Element>(input: &[Word]) -> usize {
    prepend_constant::<C, T>(input.len()).len()
}

fn run_naive_insert<C: sequence::ScanInsert<T>, T: Element>(input: &[Word]) -> usize {
    naive_sorted_insert::<C, T>(input).len()
}

fn run_append_then_sort<C: sequence::SortAll<T>, T: Element>(input: &[Word]) -> usize {
    append_then_sort::<C, T>(input).len()
}

fn run_sorted_insert<C: sequence::OrderedInsert<T>, T: Element>(input: &[Word]) -> usize {
    sorted_insert::<C, T>(input).len()
}

fn sequence_case(workload: Workload, container: ContainerKind, element: ElementKind) -> Option<SequenceCase> {
    macro_rules! dispatch {
        ($elem:ty) => {
            match (workload, container) {
                (Workload::Append, ContainerKind::Vec) => Some(run_append::<Vec<$elem>, $elem> as SequenceFn),
                (Workload::Append, ContainerKind::LinkedList) => Some(run_append::<LinkedList<$elem>, $elem> as SequenceFn),
                (Workload::Append, ContainerKind::Deque) => Some(run_append::<VecDeque<$elem>, $elem> as SequenceFn),
                (Workload::Prepend, ContainerKind::Vec) => Some(run_prepend::<Vec<$elem>, $elem> as SequenceFn),
                (Workload::Prepend, ContainerKind::LinkedList) => Some(run_prepend::<LinkedList<$elem>, $elem> as SequenceFn),
                (Workload::Prepend, ContainerKind::Deque) => Some(run_prepend::<VecDeque<$elem>, $elem> as SequenceFn),
                (Workload::NaiveInsert, ContainerKind::Vec) => Some(run_naive_insert::<Vec<$elem>, $elem> as SequenceFn),
                (Workload::NaiveInsert, ContainerKind::LinkedList) => {
                    Some(run_naive_insert::<LinkedList<$elem>, $elem> as SequenceFn)
                }
                (Workload::NaiveInsert, ContainerKind::Deque) => Some(run_naive_insert::<VecDeque<$elem>, $elem> as SequenceFn),
                (Workload::AppendThenSort, ContainerKind::Vec) => Some(run_append_then_sort::<Vec<$elem>, $elem> as SequenceFn),
                (Workload::AppendThenSort, ContainerKind::LinkedList) => {
                    Some(run_append_then_sort::<LinkedList<$elem>, $elem> as SequenceFn)
                }
                (Workload::AppendThenSort, ContainerKind::Deque) => {
                    Some(run_append_then_sort::<VecDeque<$elem>, $elem> as SequenceFn)
                }
                (Workload::SortedInsert, ContainerKind::Vec) => Some(run_sorted_insert::<Vec<$elem>, $elem> as SequenceFn),
                (Workload::SortedInsert, ContainerKind::Deque) => Some(run_sorted_insert::<VecDeque<$elem>, $elem> as SequenceFn),
                (Workload::SortedInsert, ContainerKind::MultiSet) => {
                    Some(run_sorted_insert::<OrderedMultiSet<$elem>, $elem> as SequenceFn)
                }
                // No random access for binary search, no positional or
                // unordered insertion into a multi-set.
                (Workload::SortedInsert, ContainerKind::LinkedList) => None,
                (_, ContainerKind::MultiSet) => None,
            }
        };
    }
    let run = match element {
        ElementKind::Small => dispatch!(Word),
        ElementKind::Large => dispatch!(LargeRecord),
    }?;
    Some(SequenceCase {
        workload,
        container,
        element,
        run,
    })
}

/// Containers registered for a workload, in reporting order.
pub fn containers_for(workload: Workload) -> &'static [ContainerKind] {
    match workload {
        Workload::SortedInsert => &[ContainerKind::Vec, ContainerKind::Deque, ContainerKind::MultiSet],
        _ => &[ContainerKind::Vec, ContainerKind::LinkedList, ContainerKind::Deque],
    }
}

pub fn sequence_cases() -> Vec<SequenceCase> {
    let mut cases = Vec::new();
    for workload in Workload::ALL {
        for element in ElementKind::ALL {
            for &container in containers_for(workload) {
                if let Some(case) = sequence_case(workload, container, element) {
                    cases.push(case);
                }
            }
        }
    }
    cases
}

#[derive(Debug, Clone)]
pub struct SequencePlan {
    pub sizes: Vec<usize>,
    pub cases: Vec<SequenceCase>,
}

impl SequencePlan {
    pub fn new(config: &SequenceConfig) -> Result<Self> {
        config.validate()?;
        let plan = Self {
            sizes: config.sizes.clone(),
            cases: sequence_cases(),
        };
        info!(
            cases = plan.cases.len(),
            sizes = plan.sizes.len(),
            "registered sequence benchmarks"
        );
        Ok(plan)
    }

    /// Words the shared input buffer must hold.
    pub fn required_len(&self) -> usize {
        self.sizes.iter().copied().max().unwrap_or(0)
    }

    /// Checks the buffer can serve every registered size.
    pub fn check_buffer(&self, available: usize) -> Result<()> {
        let required = self.required_len();
        ensure!(
            available >= required,
            "sequence sizes need {} input words but the buffer holds {}",
            required,
            available
        );
        debug!(required, available, "sequence buffer is large enough");
        Ok(())
    }

    pub fn filtered(mut self, filter: Option<&str>) -> Self {
        if let Some(filter) = filter {
            self.cases.retain(|case| case.key().contains(filter));
        }
        self
    }
}
