pub mod parsed_proof;
pub mod proof;
pub mod proof_format;
pub mod proof_request;
pub mod proof_request_template;
pub mod proof_state;
