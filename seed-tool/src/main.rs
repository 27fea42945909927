//! Popula a API de frota com dados de teste: usuários, veículos, reservas
//! e vínculos de benefício. Tudo passa pela API pública; nada escreve
//! direto no banco.

use std::env;

use chrono::{Duration, Utc};
use colored::*;
use rand::seq::SliceRandom;
use rand::Rng;

use frota_client::dto::{NovaReserva, NovoBeneficio, NovoUsuario, NovoVeiculo};
use frota_client::models::{
    Combustivel, PerfilUsuario, StatusUsuario, StatusVeiculo, TipoVeiculo,
};
use frota_client::{ApiClient, ClientConfig};

const TOTAL_POR_COLECAO: usize = 50;
const NUMERO_DE_BENEFICIOS: usize = 20;

const NOMES: &[&str] = &[
    "Aline", "Bruno", "Carla", "Daniel", "Eduarda", "Fábio", "Gabriela", "Heitor", "Isabela",
    "João",
];
const SOBRENOMES: &[&str] = &[
    "Silva", "Souza", "Pereira", "Oliveira", "Costa", "Rodrigues", "Almeida", "Nunes", "Marques",
    "Ferreira",
];
const CARGOS: &[&str] = &[
    "Analista Jr.", "Analista Pleno", "Analista Sênior", "Coordenador", "Gerente de Projetos",
    "Diretor", "Estagiário",
];
const DEPARTAMENTOS: &[&str] = &[
    "Financeiro", "Engenharia", "Recursos Humanos", "Marketing", "Vendas", "Operações",
    "Diretoria",
];
const FABRICANTES_MODELOS: &[(&str, &[&str])] = &[
    ("Toyota", &["Corolla", "Hilux", "Yaris"]),
    ("Honda", &["Civic", "HR-V", "Fit"]),
    ("Ford", &["Ka", "Ranger", "Mustang"]),
    ("Chevrolet", &["Onix", "S10", "Tracker"]),
    ("Volkswagen", &["Gol", "Polo", "T-Cross", "Amarok"]),
    ("Fiat", &["Mobi", "Argo", "Toro", "Strada"]),
    ("Hyundai", &["HB20", "Creta"]),
    ("Nissan", &["Kicks", "Frontier"]),
];
const CORES: &[&str] = &["Preto", "Branco", "Prata", "Cinza", "Vermelho", "Azul"];
const COMBUSTIVEIS: &[Combustivel] = &[
    Combustivel::Gasolina,
    Combustivel::Etanol,
    Combustivel::Diesel,
    Combustivel::Eletrico,
    Combustivel::Hibrido,
];
const OPCIONAIS: &[&[&str]] = &[
    &["ar condicionado", "airbag"],
    &["câmera de ré", "teto solar"],
    &["GPS", "banco de couro"],
];
const FINALIDADES: &[&str] = &[
    "Visita a cliente", "Viagem a filial", "Evento corporativo", "Transporte de material",
    "Uso da diretoria",
];

fn escolher<'a, T: ?Sized>(itens: &'a [&'a T]) -> &'a T {
    itens.choose(&mut rand::thread_rng()).copied().unwrap()
}

fn gerar_placa() -> String {
    let mut rng = rand::thread_rng();
    let letra = |rng: &mut rand::rngs::ThreadRng| rng.gen_range(b'A'..=b'Z') as char;
    format!(
        "{}{}{}-{}{}{}{}",
        letra(&mut rng),
        letra(&mut rng),
        letra(&mut rng),
        rng.gen_range(0..10),
        letra(&mut rng),
        rng.gen_range(0..10),
        rng.gen_range(0..10),
    )
}

fn gerar_usuario(indice: usize) -> NovoUsuario {
    let nome = escolher(NOMES);
    let sobrenome = escolher(SOBRENOMES);
    // um supervisor a cada dez, para ter aprovadores suficientes
    let perfil = if indice % 10 == 0 {
        PerfilUsuario::Supervisor
    } else {
        PerfilUsuario::Solicitante
    };
    NovoUsuario {
        nome: format!("{nome} {sobrenome}"),
        email: format!(
            "{}.{}{}@empresa.com",
            nome.to_lowercase(),
            sobrenome.to_lowercase(),
            indice
        ),
        senha: "senha123".to_string(),
        telefone: None,
        cargo: Some(escolher(CARGOS).to_string()),
        perfil,
        status: StatusUsuario::Ativo,
        supervisor: None,
    }
}

fn gerar_veiculo() -> NovoVeiculo {
    let mut rng = rand::thread_rng();
    let (fabricante, modelos) = FABRICANTES_MODELOS.choose(&mut rng).copied().unwrap();
    NovoVeiculo {
        fabricante: fabricante.to_string(),
        modelo: escolher(modelos).to_string(),
        placa: Some(gerar_placa()),
        cor: Some(escolher(CORES).to_string()),
        combustivel: *COMBUSTIVEIS.choose(&mut rng).unwrap(),
        tipo: TipoVeiculo::Carro,
        portas: if rng.gen_bool(0.5) { 2 } else { 4 },
        opcionais: OPCIONAIS
            .choose(&mut rng)
            .unwrap()
            .iter()
            .map(|s| s.to_string())
            .collect(),
        restricao: None,
        habilitacao: Some("B".to_string()),
        status: StatusVeiculo::Disponivel,
    }
}

fn gerar_reserva(usuarios: &[String], supervisores: &[String], veiculos: &[String]) -> NovaReserva {
    let mut rng = rand::thread_rng();
    let retirada = Utc::now() + Duration::days(rng.gen_range(1..365));
    let devolucao = retirada + Duration::days(rng.gen_range(1..=5));
    let km = rng.gen_range(50..=500) as f64;
    NovaReserva {
        solicitante: usuarios.choose(&mut rng).cloned().unwrap_or_default(),
        supervisor: supervisores.choose(&mut rng).cloned(),
        veiculo: veiculos.choose(&mut rng).cloned().unwrap_or_default(),
        data_uso: Some(retirada),
        devolucao_prevista: Some(devolucao),
        destino: Some(format!("Escritório {}", escolher(DEPARTAMENTOS))),
        finalidade: Some(escolher(FINALIDADES).to_string()),
        km_estimado: Some(km),
        combustivel_estimado: Some((km / 10.0).round()),
        observacoes: None,
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    println!("{}", "🚗 Populador da frota".bright_blue().bold());
    println!("{}", "=====================".bright_blue());

    let config = ClientConfig::default();
    println!("API: {}", config.api_base_url.bright_yellow());
    let client = ApiClient::new(config)?;

    // o seed-admin falha se o admin já existir; não é um problema
    match client.seed_admin().await {
        Ok(()) => println!("{}", "✅ Admin inicial criado".green()),
        Err(e) => println!("⚠️  Seed-admin: {}", e.mensagem_usuario().yellow()),
    }

    let email = env::var("FROTA_SEED_EMAIL").unwrap_or_else(|_| "admin@empresa.com".to_string());
    let senha = env::var("FROTA_SEED_SENHA").unwrap_or_else(|_| "admin123".to_string());
    let admin = client.login(&email, &senha).await?;
    println!(
        "{} {}",
        "🔐 Logado como".green(),
        admin.rotulo().bright_green().bold()
    );

    // 1. usuários
    println!("\nGerando {TOTAL_POR_COLECAO} usuários...");
    let mut criados = 0;
    for i in 0..TOTAL_POR_COLECAO {
        match client.criar_usuario(&gerar_usuario(i)).await {
            Ok(()) => criados += 1,
            Err(e) => println!("⚠️  usuário {i}: {}", e.mensagem_usuario().yellow()),
        }
    }
    println!("{} {criados} usuários", "✅".green());

    // 2. veículos
    println!("\nGerando {TOTAL_POR_COLECAO} veículos...");
    let mut criados = 0;
    for i in 0..TOTAL_POR_COLECAO {
        match client.criar_veiculo(&gerar_veiculo()).await {
            Ok(()) => criados += 1,
            Err(e) => println!("⚠️  veículo {i}: {}", e.mensagem_usuario().yellow()),
        }
    }
    println!("{} {criados} veículos", "✅".green());

    // 3. ids reais vêm da própria API, não das respostas de criação
    println!("\nColetando ids reais para as referências...");
    let usuarios = client.listar_usuarios().await?;
    let veiculos = client.listar_veiculos().await?;
    let ids_usuarios: Vec<String> = usuarios.iter().map(|u| u.id.clone()).collect();
    let ids_supervisores: Vec<String> = usuarios
        .iter()
        .filter(|u| u.perfil.pode_aprovar())
        .map(|u| u.id.clone())
        .collect();
    let ids_veiculos: Vec<String> = veiculos.iter().map(|v| v.id.clone()).collect();
    println!(
        "{} usuários e {} veículos no banco",
        ids_usuarios.len(),
        ids_veiculos.len()
    );

    // 4. reservas
    println!("\nGerando {TOTAL_POR_COLECAO} reservas...");
    let mut criadas = 0;
    for i in 0..TOTAL_POR_COLECAO {
        let reserva = gerar_reserva(&ids_usuarios, &ids_supervisores, &ids_veiculos);
        match client.criar_reserva(&reserva).await {
            Ok(()) => criadas += 1,
            Err(e) => println!("⚠️  reserva {i}: {}", e.mensagem_usuario().yellow()),
        }
    }
    println!("{} {criadas} reservas", "✅".green());

    // 5. benefícios sobre pares distintos de usuário/veículo
    println!("\nAtribuindo {NUMERO_DE_BENEFICIOS} benefícios...");
    let mut rng = rand::thread_rng();
    let mut usuarios_livres = ids_usuarios.clone();
    let mut veiculos_livres = ids_veiculos.clone();
    usuarios_livres.shuffle(&mut rng);
    veiculos_livres.shuffle(&mut rng);

    let mut vinculados = 0;
    for (usuario, veiculo) in usuarios_livres
        .into_iter()
        .zip(veiculos_livres)
        .take(NUMERO_DE_BENEFICIOS)
    {
        let beneficio = NovoBeneficio {
            usuario,
            veiculo,
            motorista_exclusivo: None,
            fim_de_semana: rng.gen_bool(0.5),
            local_estacionamento: Some(format!("Vaga {}", rng.gen_range(1..=100))),
            prioridade: rng.gen_range(0..=5),
            justificativa: Some("Benefício de cargo".to_string()),
            inicio: Utc::now(),
            fim: None,
        };
        match client.criar_beneficio(&beneficio).await {
            Ok(()) => vinculados += 1,
            Err(e) => println!("⚠️  benefício: {}", e.mensagem_usuario().yellow()),
        }
    }
    println!("{} {vinculados} benefícios", "✅".green());

    println!("\n{}", "🏁 População concluída".bright_green().bold());
    Ok(())
}
