use crate::pins::Port;
use crate::types::{PinRequest, TableError};
use heapless::Vec;

/// An ordered, bounded table of pin requests.
///
/// Order is priority: when two requests on the same port claim the same pin,
/// the one declared later wins. The table's length is explicit, so there is no
/// terminator entry and no unbounded scan.
///
/// # Type Parameters
/// * `N` - Maximum number of requests this table can hold
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PinTable<const N: usize> {
    requests: Vec<PinRequest, N>,
}

impl<const N: usize> PinTable<N> {
    /// Creates a new table builder.
    pub fn builder() -> PinTableBuilder<N> {
        PinTableBuilder::new()
    }

    /// Builds a validated table from a slice of requests, keeping their order.
    ///
    /// # Errors
    /// * `EmptyTable` - The slice is empty
    /// * `EmptyMask` - A request claims no pins
    /// * `CapacityExceeded` - More than `N` requests
    pub fn from_requests(requests: &[PinRequest]) -> Result<Self, TableError> {
        let mut builder = PinTableBuilder::new();
        for request in requests {
            builder = builder.request(*request)?;
        }
        builder.build()
    }

    /// Returns the requests in declaration order.
    pub fn requests(&self) -> &[PinRequest] {
        &self.requests
    }

    /// Returns the number of requests in this table.
    pub fn len(&self) -> usize {
        self.requests.len()
    }

    /// Always false for a built table; provided for API symmetry.
    pub fn is_empty(&self) -> bool {
        self.requests.is_empty()
    }

    /// Distinct ports referenced by the table, in order of first appearance.
    pub fn ports(&self) -> Vec<Port, N> {
        let mut ports: Vec<Port, N> = Vec::new();
        for request in &self.requests {
            if !ports.contains(&request.port) {
                // cannot overflow: at most one port per request
                let _ = ports.push(request.port);
            }
        }
        ports
    }
}

/// Builder for constructing validated pin tables.
#[derive(Debug)]
pub struct PinTableBuilder<const N: usize> {
    requests: Vec<PinRequest, N>,
}

impl<const N: usize> PinTableBuilder<N> {
    /// Creates a new empty builder.
    pub fn new() -> Self {
        Self {
            requests: Vec::new(),
        }
    }

    /// Appends a request. Later requests take precedence over earlier ones.
    ///
    /// # Errors
    /// Returns `CapacityExceeded` if the table is full.
    pub fn request(mut self, request: PinRequest) -> Result<Self, TableError> {
        self.requests
            .push(request)
            .map_err(|_| TableError::CapacityExceeded)?;
        Ok(self)
    }

    /// Builds and validates the table.
    ///
    /// # Errors
    /// * `EmptyTable` - No requests were added
    /// * `EmptyMask` - A request was declared without pins
    pub fn build(self) -> Result<PinTable<N>, TableError> {
        if self.requests.is_empty() {
            return Err(TableError::EmptyTable);
        }

        if let Some(index) = self.requests.iter().position(|r| r.pins.is_empty()) {
            return Err(TableError::EmptyMask { index });
        }

        Ok(PinTable {
            requests: self.requests,
        })
    }
}

impl<const N: usize> Default for PinTableBuilder<N> {
    fn default() -> Self {
        Self::new()
    }
}
