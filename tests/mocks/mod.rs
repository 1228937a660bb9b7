mod mock_contact_service;

pub use mock_contact_service::MockContactService;
