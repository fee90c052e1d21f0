use std::process::ExitCode;

use ecclesia_auth::Access;
use ecclesia_churches::{AddressSuggestion, Church, ChurchRequest};
use ecclesia_client::run_mutation;
use ecclesia_client::services::churches;
use ecclesia_core::{Address, ZipCode};

use super::settle;
use crate::cli::ChurchesCommand;
use crate::context::Context;
use crate::payload;
use crate::table::{Table, date, details, opt};

pub async fn run(ctx: &Context, command: ChurchesCommand) -> anyhow::Result<ExitCode> {
    ctx.guard(Access::Authenticated).await?;
    let api = ctx.api();
    match command {
        ChurchesCommand::List => list(ctx).await,
        ChurchesCommand::Show { id } => {
            print!("{}", describe(&churches::get(api, id).await?));
            Ok(ExitCode::SUCCESS)
        }
        ChurchesCommand::Create { file } => {
            let request: ChurchRequest = payload::read(&file)?;
            let outcome = run_mutation(churches::create(api, &request), "Church created.").await;
            settle(outcome, list(ctx)).await
        }
        ChurchesCommand::Update { id, file } => {
            let current = churches::get(api, id).await?;
            let request = payload::patched(&ChurchRequest::from(&current), payload::read(&file)?)?;
            let outcome =
                run_mutation(churches::update(api, id, &request), "Church updated.").await;
            settle(outcome, list(ctx)).await
        }
        ChurchesCommand::Delete { id } => {
            let outcome = run_mutation(churches::delete(api, id), "Church deleted.").await;
            settle(outcome, list(ctx)).await
        }
        ChurchesCommand::LookupCep { cep } => {
            let zip = ZipCode::new(&cep);
            if !zip.is_lookup_ready() {
                anyhow::bail!("a CEP has 8 digits, got '{cep}'");
            }
            match ctx.cep().lookup(&zip).await? {
                Some(suggestion) => {
                    print!("{}", suggested_address(&suggestion));
                    Ok(ExitCode::SUCCESS)
                }
                None => {
                    println!("No address found for CEP {}.", zip.digits());
                    Ok(ExitCode::FAILURE)
                }
            }
        }
    }
}

async fn list(ctx: &Context) -> anyhow::Result<ExitCode> {
    print!("{}", table(&churches::list(ctx.api()).await?));
    Ok(ExitCode::SUCCESS)
}

fn table(churches: &[Church]) -> Table {
    let mut table = Table::new(["ID", "Name", "Trade name", "Registry", "City", "Pastor"]);
    for c in churches {
        table.row([
            c.id.to_string(),
            c.name.clone(),
            opt(Some(&c.trade_name)),
            c.formatted_registry(),
            opt(c.city.as_deref().or(Some(&c.address.address.city))),
            opt(c.pastor_local_name.as_deref()),
        ]);
    }
    table
}

fn describe(c: &Church) -> String {
    details(&[
        ("ID", c.id.to_string()),
        ("Name", c.name.clone()),
        ("Trade name", opt(Some(&c.trade_name))),
        ("Registry", format!("{} {}", c.registry_type.as_str(), c.formatted_registry())),
        ("Founded", date(c.foundation_date)),
        ("Pastor", opt(c.pastor_local_name.as_deref())),
        ("Address", c.address.address.summary()),
    ])
}

/// Address fields a church form would be pre-filled with.
fn suggested_address(suggestion: &AddressSuggestion) -> String {
    let mut address = Address {
        zip_code: suggestion.cep.clone(),
        ..Address::default()
    };
    suggestion.apply_to(&mut address);
    details(&[
        ("CEP", opt(Some(&address.zip_code))),
        ("Street", opt(Some(&address.street))),
        ("Neighborhood", opt(Some(&address.neighborhood))),
        ("City", opt(Some(&address.city))),
        ("State", opt(Some(&address.state))),
        ("Country", opt(Some(&address.country))),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn suggestion_fills_country() {
        let suggestion: AddressSuggestion = serde_json::from_value(serde_json::json!({
            "cep": "01001-000",
            "logradouro": "Praça da Sé",
            "bairro": "Sé",
            "localidade": "São Paulo",
            "uf": "SP"
        }))
        .unwrap();
        let text = suggested_address(&suggestion);
        assert!(text.contains("Street:       Praça da Sé"));
        assert!(text.contains("Country:      Brasil"));
    }

    #[test]
    fn list_falls_back_to_address_city() {
        let church: Church = serde_json::from_value(serde_json::json!({
            "id": 3,
            "name": "Igreja Central",
            "tradeName": "IEC",
            "registryType": "CNPJ",
            "registryNumber": "12345678000199",
            "address": {"city": "Olinda"}
        }))
        .unwrap();
        let text = table(&[church]).to_string();
        assert!(text.lines().nth(2).unwrap().contains("Olinda"));
    }
}
