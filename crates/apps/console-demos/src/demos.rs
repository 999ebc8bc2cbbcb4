//! Runnable demonstrations, one per teaching unit.
//!
//! Each demo is standalone: none reads anything another one produced.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use domain::{Console, User};
use fetch_feature::{FetchFeatureError, FetchService, LabeledFetch};
use product_feature::{Catalog, FlakyProductService, ProductService, RandomFailures};
use tracing::{error, info};

use crate::config::DemoConfig;
use crate::error::AppError;

/// Document decoded by [`Demo::DecodeJson`]
pub const USER_JSON: &str = r#"{
  "Id": 1,
  "Name": "Thiago"
}"#;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Demo {
    FetchUser,
    FetchGeneric,
    FetchTwo,
    SyncLookup,
    ClassifiedLookup,
    FlakyLookup,
    DecodeJson,
}

/// What the command line asked to run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    One(Demo),
    All,
}

impl Selection {
    pub fn demos(&self) -> &[Demo] {
        match self {
            Selection::One(demo) => std::slice::from_ref(demo),
            Selection::All => &Demo::EACH,
        }
    }
}

impl Selection {
    /// Pick the selection from the arguments after the program name
    ///
    /// The first argument names a demo or `all`; no argument means `all`.
    pub fn from_args<I>(args: I) -> Result<Self, AppError>
    where
        I: IntoIterator<Item = String>,
    {
        args.into_iter()
            .next()
            .map_or(Ok(Selection::All), |name| name.parse())
    }
}

impl FromStr for Selection {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "all" {
            return Ok(Selection::All);
        }
        s.parse().map(Selection::One)
    }
}

impl Demo {
    /// Every individual demo, in presentation order
    pub const EACH: [Demo; 7] = [
        Demo::FetchUser,
        Demo::FetchGeneric,
        Demo::FetchTwo,
        Demo::SyncLookup,
        Demo::ClassifiedLookup,
        Demo::FlakyLookup,
        Demo::DecodeJson,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Demo::FetchUser => "fetch-user",
            Demo::FetchGeneric => "fetch-generic",
            Demo::FetchTwo => "fetch-two",
            Demo::SyncLookup => "sync-lookup",
            Demo::ClassifiedLookup => "classified-lookup",
            Demo::FlakyLookup => "flaky-lookup",
            Demo::DecodeJson => "decode-json",
        }
    }
}

impl fmt::Display for Demo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Demo {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Demo::EACH
            .into_iter()
            .find(|demo| demo.name() == s)
            .ok_or_else(|| AppError::UnknownDemo {
                name: s.to_string(),
                expected: Demo::EACH
                    .iter()
                    .map(Demo::name)
                    .chain(["all"])
                    .collect::<Vec<_>>()
                    .join(", "),
            })
    }
}

/// Run the selected demos in order
///
/// With more than one demo selected, each is preceded by a banner line.
pub async fn run_selection(
    selection: Selection,
    config: &DemoConfig,
    console: Arc<dyn Console>,
) -> Result<(), AppError> {
    let demos = selection.demos();

    for &demo in demos {
        if demos.len() > 1 {
            console.line(&format!("--- {demo} ---"));
        }
        run_demo(demo, config, console.clone()).await?;
    }

    Ok(())
}

/// Run one demo
pub async fn run_demo(
    demo: Demo,
    config: &DemoConfig,
    console: Arc<dyn Console>,
) -> Result<(), AppError> {
    info!(demo = %demo, "Running demo");

    match demo {
        Demo::FetchUser => {
            let pending = FetchService::start_user_fetch(config.fetch_delay, console.clone());
            console.line("Escrevendo uma linha aqui de forma síncrona.");
            pending.await.map_err(FetchFeatureError::from)??;
        }
        Demo::FetchGeneric => {
            let user: User = FetchService::fetch(config.fetch_delay, console.as_ref()).await;
            console.line(&format!("Id: {}, Nome: {}", user.id, user.name));
        }
        Demo::FetchTwo => {
            let report = FetchService::fetch_pair(
                LabeledFetch::new("Usuário A", config.first_delay),
                LabeledFetch::new("Usuário B", config.second_delay),
                console.clone(),
            )
            .await?;
            info!(elapsed_ms = report.elapsed.as_millis() as u64, "Pair finished");
        }
        Demo::SyncLookup => {
            Catalog::run(&[1, 2], console.as_ref());
        }
        Demo::ClassifiedLookup => {
            if let Err(err) = ProductService::run(2, console.as_ref()).await {
                error!(error = %err, "Technical failure escaped the lookup");
                console.line(&format!("InternalServerError: {err}"));
            }
        }
        Demo::FlakyLookup => {
            let service =
                FlakyProductService::new(RandomFailures::new(config.failure_probability));
            service.run_and_report(1, console.as_ref()).await;
        }
        Demo::DecodeJson => {
            console.line("Texto estruturado em JSON:");
            console.line(USER_JSON);

            let user = User::from_json(USER_JSON)?;
            console.line("Documento JSON convertido para struct User.");
            console.line(&format!("Acessando a propriedade 'user.name': {}", user.name));
        }
    }

    Ok(())
}
