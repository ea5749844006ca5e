use clap::{Args, Parser, Subcommand};
use reqwest::{Client, Response, StatusCode};
use serde::{Deserialize, Serialize};

/// Command line client for the pedidos api
#[derive(Parser, Debug)]
#[command(name = "pedidos-client")]
#[command(about = "client cli used to manage orders on a running pedidos-api server", version, long_about = None
)]
struct Cli {
    #[arg(long, global = true, default_value = "http://localhost:8080", help = "Base url of the server")]
    host: String,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// list every order
    List,
    /// show one order
    #[command(arg_required_else_help = true)]
    Get { id: i64 },
    /// create an order
    #[command(arg_required_else_help = true)]
    Create {
        #[arg(long, help = "Id of the new order")]
        id: i64,
        #[command(flatten)]
        fields: OrderFields,
    },
    /// replace every field of an order
    #[command(arg_required_else_help = true)]
    Replace {
        id: i64,
        #[arg(long, help = "Id stored after the replacement, defaults to the current one")]
        new_id: Option<i64>,
        #[command(flatten)]
        fields: OrderFields,
    },
    /// delete an order
    #[command(arg_required_else_help = true)]
    Delete { id: i64 },
}

#[derive(Debug, Args)]
struct OrderFields {
    #[arg(long)]
    descripcion: String,
    #[arg(long)]
    valor: f64,
    #[arg(long, default_value = "pendiente")]
    estado: String,
}

#[derive(Debug, Serialize, Deserialize)]
struct Pedido {
    id: i64,
    descripcion: String,
    valor: f64,
    estado: String,
}

impl Pedido {
    fn new(id: i64, fields: OrderFields) -> Self {
        Self {
            id,
            descripcion: fields.descripcion,
            valor: fields.valor,
            estado: fields.estado,
        }
    }
}

#[derive(Debug, Deserialize)]
struct Message {
    #[serde(alias = "ERROR")]
    message: String,
}

fn print_pedido(p: &Pedido) {
    println!("#{} {} valor={} estado={}", p.id, p.descripcion, p.valor, p.estado);
}

async fn report_failure(res: Response) -> Result<(), anyhow::Error> {
    match res.status() {
        status @ (StatusCode::BAD_REQUEST | StatusCode::NOT_FOUND) => {
            let msg = res.json::<Message>().await?;
            println!("{}: {}", status, msg.message);
        }
        unexpected => {
            println!("got unexpected status code, {}", unexpected);
        }
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    let args = Cli::parse();
    let client = Client::new();
    let base = format!("{}/pedidos", args.host.trim_end_matches('/'));

    match args.command {
        Commands::List => {
            let res = client.get(&base).send().await?;
            match res.status() {
                StatusCode::OK => {
                    for p in res.json::<Vec<Pedido>>().await? {
                        print_pedido(&p);
                    }
                }
                _ => report_failure(res).await?,
            }
        }
        Commands::Get { id } => {
            let res = client.get(format!("{}/{}", base, id)).send().await?;
            match res.status() {
                StatusCode::OK => print_pedido(&res.json::<Pedido>().await?),
                _ => report_failure(res).await?,
            }
        }
        Commands::Create { id, fields } => {
            let res = client.post(&base).json(&Pedido::new(id, fields)).send().await?;
            match res.status() {
                StatusCode::CREATED => {
                    println!("created order");
                    print_pedido(&res.json::<Pedido>().await?);
                }
                _ => report_failure(res).await?,
            }
        }
        Commands::Replace { id, new_id, fields } => {
            let res = client
                .put(format!("{}/{}", base, id))
                .json(&Pedido::new(new_id.unwrap_or(id), fields))
                .send()
                .await?;
            match res.status() {
                StatusCode::OK => {
                    println!("replaced order {}", id);
                    print_pedido(&res.json::<Pedido>().await?);
                }
                _ => report_failure(res).await?,
            }
        }
        Commands::Delete { id } => {
            let res = client.delete(format!("{}/{}", base, id)).send().await?;
            match res.status() {
                StatusCode::NO_CONTENT => println!("deleted order {}", id),
                _ => report_failure(res).await?,
            }
        }
    };
    Ok(())
}
