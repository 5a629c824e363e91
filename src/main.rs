use anyhow::{bail, Context};
use clap::Parser;
use person::{
    consts::consts::{Age, Number},
    model::{
        behavior::{c_function, PersonBehavior},
        person::Person,
    },
};
use serde_json::Value;

/// 👤 RDPerson, builds a person from the flags, duplicates it and runs every behavior hook
///
/// Example: `rdperson --name Alice --age 30 --number 7 --is-ok --array '[1, 2, 3]'`
#[derive(Parser, Debug)]
struct Cli {
    #[clap(long, default_value_t = String::new())]
    name: String,

    #[clap(long, default_value = "0", allow_negative_numbers = true)]
    age: Age,

    #[clap(long, default_value = "0", allow_negative_numbers = true)]
    number: Number,

    #[clap(long)]
    is_ok: bool,

    /// Elements of the array as a JSON array, e.g. '[1, "two", null]'
    #[clap(long, default_value = "[]")]
    array: String,
}

fn parse_array(raw: &str) -> anyhow::Result<Vec<Value>> {
    let value: Value =
        serde_json::from_str(raw).with_context(|| format!("--array is not valid JSON: {}", raw))?;

    match value {
        Value::Array(values) => Ok(values),
        other => bail!("--array must be a JSON array, got: {}", other),
    }
}

fn build_person(args: &Cli) -> anyhow::Result<Person> {
    Ok(Person::new()
        .with_name(args.name.as_str())
        .with_age(args.age)
        .with_number(args.number)
        .with_is_ok(args.is_ok)
        .with_values(parse_array(&args.array)?))
}

fn log_outcome<T: std::fmt::Debug>(hook: &str, outcome: Result<T, impl std::fmt::Display>) {
    match outcome {
        Ok(value) => log::info!("{} returned {:?}", hook, value),
        Err(e) => log::info!("{} failed: {}", hook, e),
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let args = Cli::parse();

    let person = build_person(&args)?;
    log::info!("Built {}", person);

    let duplicate = person.duplicate();
    log::info!(
        "Duplicated {}, shares array: {}",
        duplicate,
        duplicate.shares_array_with(&person)
    );

    log_outcome("instance_method", person.instance_method());
    log_outcome("class_method", Person::class_method());
    log_outcome("instance_void_method", person.instance_void_method());
    log_outcome("class_void_method", Person::class_void_method());
    log_outcome("c_function", c_function());

    Ok(())
}
