pub mod router;
pub mod endpoints {
    pub mod event;
    pub mod status;
}
