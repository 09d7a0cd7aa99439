use edgekit_api::transport::{Method, Request, Transport, TransportError};
use edgekit_core::value::Value;
use std::{cell::RefCell, collections::VecDeque, fmt};

// Module: journal
// Responsibility: keep a bounded in-memory trail of transport exchanges for
// diagnostics. Recording happens behind `&self`; the journal is
// single-thread like the client that owns it.

///
/// JournalOutcome
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum JournalOutcome {
    Success,
    Failure { message: String },
}

///
/// JournalEntry
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct JournalEntry {
    pub method: Method,
    pub path: String,
    pub query: Vec<(String, String)>,
    pub outcome: JournalOutcome,
}

impl JournalEntry {
    fn from_exchange(request: &Request, result: &Result<Value, TransportError>) -> Self {
        let outcome = match result {
            Ok(_) => JournalOutcome::Success,
            Err(error) => JournalOutcome::Failure {
                message: error.to_string(),
            },
        };

        Self {
            method: request.method,
            path: request.path.as_str().to_string(),
            query: request.query.clone(),
            outcome,
        }
    }
}

impl fmt::Display for JournalEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.method, self.path)?;
        for (position, (key, value)) in self.query.iter().enumerate() {
            let separator = if position == 0 { '?' } else { '&' };
            write!(f, "{separator}{key}={value}")?;
        }

        match &self.outcome {
            JournalOutcome::Success => write!(f, " => ok"),
            JournalOutcome::Failure { message } => write!(f, " => {message}"),
        }
    }
}

///
/// Journal
///
/// Ring of the most recent exchanges. A capacity of zero records nothing.
///

#[derive(Debug)]
pub struct Journal {
    entries: RefCell<VecDeque<JournalEntry>>,
    capacity: usize,
}

impl Journal {
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: RefCell::new(VecDeque::with_capacity(capacity)),
            capacity,
        }
    }

    pub fn record(&self, entry: JournalEntry) {
        if self.capacity == 0 {
            return;
        }

        let mut entries = self.entries.borrow_mut();
        if entries.len() == self.capacity {
            entries.pop_front();
        }
        entries.push_back(entry);
    }

    /// The most recent exchange, if any.
    #[must_use]
    pub fn last(&self) -> Option<JournalEntry> {
        self.entries.borrow().back().cloned()
    }

    /// Oldest-first snapshot of the retained exchanges.
    #[must_use]
    pub fn entries(&self) -> Vec<JournalEntry> {
        self.entries.borrow().iter().cloned().collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }

    pub fn clear(&self) {
        self.entries.borrow_mut().clear();
    }
}

///
/// JournaledTransport
///
/// Decorator that records every exchange before handing the result back.
///

pub struct JournaledTransport {
    inner: Box<dyn Transport>,
    journal: Journal,
}

impl JournaledTransport {
    #[must_use]
    pub fn new(inner: Box<dyn Transport>, capacity: usize) -> Self {
        Self {
            inner,
            journal: Journal::with_capacity(capacity),
        }
    }

    #[must_use]
    pub const fn journal(&self) -> &Journal {
        &self.journal
    }
}

impl Transport for JournaledTransport {
    fn send(&self, request: &Request) -> Result<Value, TransportError> {
        let result = self.inner.send(request);
        self.journal
            .record(JournalEntry::from_exchange(request, &result));

        result
    }
}

///
/// TESTS
///
