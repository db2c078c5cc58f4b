// src/domain/sessao.rs
//
// Leitura do payload do JWT SEM verificação de assinatura, exatamente o
// que o cliente faz para montar a sessão local. Isto NÃO é autenticação:
// serve apenas para decidir quais telas exibir. A autoridade real é a
// validação com assinatura feita pelo middleware em cada requisição.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use serde::Deserialize;
use uuid::Uuid;

/// Retrato dos claims no momento do login. Imutável durante a sessão:
/// mudança de cargo no servidor só aparece após novo login.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct SessaoSnapshot {
    pub membro_id: Option<Uuid>,

    #[serde(default)]
    pub nome: Option<String>,

    #[serde(default)]
    pub cargos: Vec<String>,
}

/// Decodifica o segmento de payload de um JWT sem conferir assinatura.
/// Qualquer falha vira `None` ("sem sessão"), nunca um erro.
pub fn decodificar_sem_verificar(token: &str) -> Option<SessaoSnapshot> {
    let payload = token.split('.').nth(1)?;
    let bytes = URL_SAFE_NO_PAD.decode(payload).ok()?;
    serde_json::from_slice(&bytes).ok()
}

const CARGOS_TESOURARIA: &[&str] = &["Tesoureiro", "Segundo_Tesoureiro", "Pastor"];
const CARGOS_SECRETARIA: &[&str] = &["Secretario", "Segundo_Secretario"];

pub fn autorizado_tesouraria(cargos: &[String]) -> bool {
    cargos.iter().any(|c| CARGOS_TESOURARIA.contains(&c.as_str()))
}

pub fn autorizado_secretaria(cargos: &[String]) -> bool {
    cargos.iter().any(|c| CARGOS_SECRETARIA.contains(&c.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn token_com_payload(payload: &serde_json::Value) -> String {
        let cabecalho = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
        let corpo = URL_SAFE_NO_PAD.encode(payload.to_string().as_bytes());
        format!("{cabecalho}.{corpo}.assinatura-qualquer")
    }

    #[test]
    fn decodifica_claims_sem_assinatura_valida() {
        let membro_id = Uuid::new_v4();
        let token = token_com_payload(&json!({
            "membro_id": membro_id,
            "nome": "João",
            "cargos": ["Tesoureiro", "Diacono"],
            "exp": 4_102_444_800u64,
        }));

        let sessao = decodificar_sem_verificar(&token).unwrap();
        assert_eq!(sessao.membro_id, Some(membro_id));
        assert_eq!(sessao.nome.as_deref(), Some("João"));
        assert_eq!(sessao.cargos, vec!["Tesoureiro", "Diacono"]);
    }

    #[test]
    fn token_malformado_vira_sem_sessao() {
        assert_eq!(decodificar_sem_verificar(""), None);
        assert_eq!(decodificar_sem_verificar("so-um-segmento"), None);
        assert_eq!(decodificar_sem_verificar("a.###.b"), None);

        let payload_nao_json = format!("x.{}.y", URL_SAFE_NO_PAD.encode(b"nao sou json"));
        assert_eq!(decodificar_sem_verificar(&payload_nao_json), None);
    }

    #[test]
    fn claims_sem_cargos_viram_lista_vazia() {
        let token = token_com_payload(&json!({ "membro_id": Uuid::new_v4() }));
        let sessao = decodificar_sem_verificar(&token).unwrap();
        assert!(sessao.cargos.is_empty());
        assert!(!autorizado_tesouraria(&sessao.cargos));
        assert!(!autorizado_secretaria(&sessao.cargos));
    }

    #[test]
    fn decodifica_token_emitido_pelo_servidor() {
        // O mesmo formato que o AuthService emite no login
        use crate::models::auth::Claims;
        use jsonwebtoken::{encode, EncodingKey, Header};

        let claims = Claims {
            sub: Uuid::new_v4(),
            membro_id: Uuid::new_v4(),
            nome: "Maria".to_string(),
            cargos: vec!["Secretario".to_string()],
            exp: 4_102_444_800,
            iat: 1_700_000_000,
        };
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(b"segredo-de-teste"),
        )
        .unwrap();

        // O cliente lê o retrato sem conhecer o segredo
        let sessao = decodificar_sem_verificar(&token).unwrap();
        assert_eq!(sessao.membro_id, Some(claims.membro_id));
        assert_eq!(sessao.nome.as_deref(), Some("Maria"));
        assert!(autorizado_secretaria(&sessao.cargos));
        assert!(!autorizado_tesouraria(&sessao.cargos));
    }

    #[test]
    fn regras_de_acesso_por_cargo() {
        let cargos = |nomes: &[&str]| nomes.iter().map(|s| s.to_string()).collect::<Vec<_>>();

        assert!(autorizado_tesouraria(&cargos(&["Tesoureiro"])));
        assert!(autorizado_tesouraria(&cargos(&["Segundo_Tesoureiro"])));
        assert!(autorizado_tesouraria(&cargos(&["Pastor"])));
        assert!(!autorizado_tesouraria(&cargos(&["Secretario"])));

        assert!(autorizado_secretaria(&cargos(&["Secretario"])));
        assert!(autorizado_secretaria(&cargos(&["Segundo_Secretario"])));
        assert!(!autorizado_secretaria(&cargos(&["Diacono", "Pastor"])));
    }
}
