use sdm_client::{ResourceClient, Settings};
use serde::Serialize;
use std::error::Error;
use std::sync::Arc;

const USAGE: &str = "usage: sdm-client curso | semestre <sid> | disciplina <sigla>";

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let settings = Settings::load()?;
    let client = ResourceClient::new(settings)?;
    let mut errors = client.errors();

    let mut args = std::env::args().skip(1);
    let json = match (args.next().as_deref(), args.next()) {
        (Some("curso"), None) => {
            let course = client.watch_course();
            client.fetch_course().await?;
            to_json(course.current())?
        }
        (Some("semestre"), Some(sid)) => {
            let semester = client.watch_semester();
            client.fetch_semester(sid.parse()?).await?;
            to_json(semester.current())?
        }
        (Some("disciplina"), Some(sigla)) => {
            let discipline = client.watch_discipline();
            client.fetch_discipline(&sigla).await?;
            to_json(discipline.current())?
        }
        _ => Err(USAGE)?,
    };

    match json {
        Some(json) => println!("{json}"),
        None => Err(errors.try_recv()?.to_string())?,
    }
    Ok(())
}

fn to_json<T: Serialize>(value: Option<Arc<T>>) -> serde_json::Result<Option<String>> {
    value.map(|v| serde_json::to_string(&*v)).transpose()
}
