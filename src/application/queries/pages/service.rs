use std::sync::Arc;

use crate::domain::page::PageReadRepository;

pub struct PageQueryService {
    pub(super) page_repo: Arc<dyn PageReadRepository>,
}

impl PageQueryService {
    pub fn new(page_repo: Arc<dyn PageReadRepository>) -> Self {
        Self { page_repo }
    }
}
