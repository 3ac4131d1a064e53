//! Presentation-shell state: current symbol and fetch generation.
//!
//! A symbol change can trigger a new fetch while an older one is still in
//! flight. Nothing is cancelled; instead each fetch carries a generation
//! token and only the result of the most recently issued fetch is applied.

use crate::aggregate::DashboardView;
use crate::Symbol;

/// Token tying an in-flight fetch to the generation that issued it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket {
    generation: u64,
}

/// State container owned by the presentation shell.
#[derive(Debug)]
pub struct DashboardSession {
    symbol: Symbol,
    generation: u64,
    view: Option<DashboardView>,
}

impl DashboardSession {
    pub fn new(symbol: Symbol) -> Self {
        Self {
            symbol,
            generation: 0,
            view: None,
        }
    }

    pub fn symbol(&self) -> &Symbol {
        &self.symbol
    }

    /// Last applied view, if any fetch has completed.
    pub fn view(&self) -> Option<&DashboardView> {
        self.view.as_ref()
    }

    /// Start a fetch cycle for `symbol`, invalidating all earlier tickets.
    pub fn begin_fetch(&mut self, symbol: Symbol) -> FetchTicket {
        self.symbol = symbol;
        self.generation += 1;
        FetchTicket {
            generation: self.generation,
        }
    }

    /// Apply a completed fetch. Returns `false` (and drops the view) when a
    /// newer fetch was issued after `ticket`, so stale results never
    /// overwrite fresher ones.
    pub fn apply(&mut self, ticket: FetchTicket, view: DashboardView) -> bool {
        if ticket.generation != self.generation {
            return false;
        }
        self.view = Some(view);
        true
    }
}
