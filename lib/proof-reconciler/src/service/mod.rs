pub mod proof;
pub mod proof_request_template;
