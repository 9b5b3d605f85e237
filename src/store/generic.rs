use std::sync::{Mutex, PoisonError};

#[derive(Default)]
pub struct Generic {
    state: Mutex<super::RawMap>,
}

impl super::StoreBackend for Generic {
    fn load(&self) -> Result<super::RawMap, super::StoreError> {
        Ok(self
            .state
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone())
    }

    fn save(&self, values: &super::RawMap) -> Result<(), super::StoreError> {
        *self.state.lock().unwrap_or_else(PoisonError::into_inner) = values.clone();
        Ok(())
    }
}
