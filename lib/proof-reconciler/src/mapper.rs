use shared_types::Referent;

use crate::dto::{ProofRequestDTO, RequestedAttributeDTO};
use crate::error::MalformedProofDefinitionError;
use crate::model::proof_request::{
    GroupedAttributeRequest, ProofRequest, RequestedAttribute, SingleAttributeRequest,
};
use crate::model::proof_request_template::TemplateRequestedAttribute;

impl TryFrom<ProofRequestDTO> for ProofRequest {
    type Error = MalformedProofDefinitionError;

    fn try_from(value: ProofRequestDTO) -> Result<Self, Self::Error> {
        let requested_attributes = value
            .requested_attributes
            .into_iter()
            .map(|(referent, attribute)| {
                let attribute = requested_attribute_from_dto(&referent, attribute)?;
                Ok((referent, attribute))
            })
            .collect::<Result<_, MalformedProofDefinitionError>>()?;

        Ok(Self {
            name: value.name,
            version: value.version,
            nonce: value.nonce,
            requested_attributes,
            requested_predicates: value.requested_predicates,
            non_revoked: value.non_revoked,
        })
    }
}

impl From<ProofRequest> for ProofRequestDTO {
    fn from(value: ProofRequest) -> Self {
        Self {
            name: value.name,
            version: value.version,
            nonce: value.nonce,
            requested_attributes: value
                .requested_attributes
                .into_iter()
                .map(|(referent, attribute)| (referent, attribute.into()))
                .collect(),
            requested_predicates: value.requested_predicates,
            non_revoked: value.non_revoked,
        }
    }
}

pub(crate) fn requested_attribute_from_dto(
    referent: &Referent,
    value: RequestedAttributeDTO,
) -> Result<RequestedAttribute, MalformedProofDefinitionError> {
    match (value.name, value.names) {
        (Some(_), Some(_)) => Err(MalformedProofDefinitionError::AmbiguousAttribute {
            referent: referent.to_owned(),
        }),
        (None, None) => Err(MalformedProofDefinitionError::MissingAttributeName {
            referent: referent.to_owned(),
        }),
        (Some(name), None) => Ok(RequestedAttribute::Single(SingleAttributeRequest {
            name,
            restrictions: value.restrictions,
            non_revoked: value.non_revoked,
        })),
        (None, Some(names)) if names.is_empty() => {
            Err(MalformedProofDefinitionError::EmptyAttributeGroup {
                referent: referent.to_owned(),
            })
        }
        (None, Some(names)) => Ok(RequestedAttribute::Group(GroupedAttributeRequest {
            names,
            restrictions: value.restrictions,
            non_revoked: value.non_revoked,
        })),
    }
}

impl From<RequestedAttribute> for RequestedAttributeDTO {
    fn from(value: RequestedAttribute) -> Self {
        match value {
            RequestedAttribute::Single(request) => Self {
                name: Some(request.name),
                names: None,
                restrictions: request.restrictions,
                non_revoked: request.non_revoked,
            },
            RequestedAttribute::Group(request) => Self {
                name: None,
                names: Some(request.names),
                restrictions: request.restrictions,
                non_revoked: request.non_revoked,
            },
        }
    }
}

impl From<TemplateRequestedAttribute> for RequestedAttributeDTO {
    fn from(value: TemplateRequestedAttribute) -> Self {
        Self {
            name: value.name,
            names: value.names,
            restrictions: value.restrictions,
            non_revoked: value.non_revoked,
        }
    }
}
