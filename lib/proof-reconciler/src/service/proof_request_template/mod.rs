pub mod service;

pub use service::{
    build_proof_request_for_template, build_proof_request_for_template_id, generate_nonce,
    get_proof_request_template,
};

#[cfg(test)]
mod test;
