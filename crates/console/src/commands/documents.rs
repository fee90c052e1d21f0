use std::process::ExitCode;

use anyhow::Context as _;

use ecclesia_auth::Access;
use ecclesia_client::services::documents;
use ecclesia_core::{MemberId, MinisterId};
use ecclesia_documents::{DocumentRequest, DocumentType};

use super::save;
use crate::cli::DocumentsCommand;
use crate::context::Context;
use crate::table::{Table, yes_no};

pub async fn run(ctx: &Context, command: DocumentsCommand) -> anyhow::Result<ExitCode> {
    ctx.guard(Access::Authenticated).await?;
    match command {
        DocumentsCommand::Types => {
            print!("{}", types());
            Ok(ExitCode::SUCCESS)
        }
        DocumentsCommand::Generate {
            document_type,
            member,
            minister,
            purpose,
            recipient,
            subject,
            body_file,
            output,
        } => {
            let body = match body_file {
                Some(path) => Some(
                    tokio::fs::read_to_string(&path)
                        .await
                        .with_context(|| format!("reading {}", path.display()))?,
                ),
                None => None,
            };
            let request = build_request(Fields {
                document_type,
                member,
                minister,
                purpose: body.or(purpose),
                recipient,
                subject,
            });
            let pdf = documents::generate(ctx.api(), &request).await?;
            let name = request.file_name(chrono::Utc::now().timestamp_millis());
            let path = save(&output, &name, &pdf).await?;
            println!("Saved {}.", path.display());
            Ok(ExitCode::SUCCESS)
        }
        DocumentsCommand::Template { document_type } => {
            if !document_type.has_template() {
                anyhow::bail!("{} has no template", document_type.label());
            }
            println!("{}", documents::template(ctx.api(), document_type).await?);
            Ok(ExitCode::SUCCESS)
        }
    }
}

struct Fields {
    document_type: DocumentType,
    member: Option<MemberId>,
    minister: Option<MinisterId>,
    purpose: Option<String>,
    recipient: Option<String>,
    subject: Option<String>,
}

fn build_request(f: Fields) -> DocumentRequest {
    let purpose = f.purpose.unwrap_or_default();
    match (f.document_type, f.member, f.minister) {
        (DocumentType::RecommendationLetterMember, Some(id), _) => {
            DocumentRequest::member_letter(id, purpose)
        }
        (DocumentType::RecommendationLetterMinister, _, Some(id)) => {
            DocumentRequest::minister_letter(id, purpose)
        }
        (t, member, minister) => DocumentRequest {
            id_member: member,
            id_minister: minister,
            ..DocumentRequest::office(
                t,
                f.recipient.unwrap_or_default(),
                f.subject.unwrap_or_default(),
                purpose,
            )
        },
    }
}

fn types() -> Table {
    let mut table = Table::new(["Type", "Name", "Template"]);
    for t in DocumentType::ALL {
        table.row([
            t.as_str().to_ascii_lowercase().replace('_', "-"),
            t.label().to_string(),
            yes_no(t.has_template()).to_string(),
        ]);
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(document_type: DocumentType) -> Fields {
        Fields {
            document_type,
            member: None,
            minister: None,
            purpose: None,
            recipient: None,
            subject: None,
        }
    }

    #[test]
    fn member_letter_uses_member_id() {
        let request = build_request(Fields {
            member: Some(MemberId::new(12)),
            purpose: Some("Transferência".into()),
            ..fields(DocumentType::RecommendationLetterMember)
        });
        assert_eq!(request, DocumentRequest::member_letter(MemberId::new(12), "Transferência"));
        assert_eq!(request.file_name(0), "documento_12.pdf");
    }

    #[test]
    fn letter_without_person_fails_validation() {
        let request = build_request(fields(DocumentType::RecommendationLetterMinister));
        assert!(request.validate().is_err());
    }

    #[test]
    fn office_keeps_recipient_and_subject() {
        let request = build_request(Fields {
            recipient: Some("Prefeitura".into()),
            subject: Some("Alvará".into()),
            purpose: Some("Solicitamos...".into()),
            ..fields(DocumentType::PublicPermitRequestOffice)
        });
        assert_eq!(request.recipient.as_deref(), Some("Prefeitura"));
        assert_eq!(request.purpose.as_deref(), Some("Solicitamos..."));
        assert_eq!(
            request.file_name(1700000000000),
            "public_permit_request_office_1700000000000.pdf"
        );
    }

    #[test]
    fn type_names_parse_back() {
        let text = types().to_string();
        for line in text.lines().skip(2) {
            let name = line.split_whitespace().next().unwrap();
            assert!(name.parse::<DocumentType>().is_ok(), "{name}");
        }
    }
}
