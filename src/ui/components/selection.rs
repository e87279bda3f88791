// File: src/ui/components/selection.rs

use std::collections::HashSet;
use std::sync::{Arc, Mutex};

/// Stato di selezione delle pagine: possiede la lista fissa delle etichette
/// e l'insieme degli indici selezionati. Tutte le mutazioni passano da qui.
pub struct PageSelection {
    /// Etichette delle pagine, nell'ordine fornito dall'embedder
    pages: Vec<String>,
    /// Indici delle pagine selezionate
    selected_indices: HashSet<usize>,
}

impl PageSelection {
    /// Crea una nuova selezione vuota sulla lista di pagine data
    pub fn new(pages: Vec<String>) -> Self {
        PageSelection {
            pages,
            selected_indices: HashSet::new(),
        }
    }

    /// Attiva/disattiva la selezione di una pagina. Indici fuori dalla
    /// lista vengono ignorati: la selezione resta sempre un sottoinsieme
    /// delle pagine.
    pub fn toggle(&mut self, idx: usize) {
        if idx >= self.pages.len() {
            return;
        }
        if self.selected_indices.contains(&idx) {
            self.selected_indices.remove(&idx);
        } else {
            self.selected_indices.insert(idx);
        }
    }

    /// Toggle aggregato "tutte le pagine": se sono già tutte selezionate
    /// svuota la selezione in un colpo solo, altrimenti seleziona tutte le
    /// pagine in un colpo solo.
    pub fn toggle_all(&mut self) {
        if self.all_selected() {
            self.selected_indices.clear();
        } else {
            self.selected_indices = (0..self.pages.len()).collect();
        }
    }

    /// Verifica se una pagina è selezionata
    pub fn is_selected(&self, idx: usize) -> bool {
        self.selected_indices.contains(&idx)
    }

    /// Flag derivato: vero se e solo se la selezione copre tutta la lista.
    /// Ricalcolato ad ogni chiamata, mai memorizzato a parte.
    pub fn all_selected(&self) -> bool {
        self.selected_indices.len() == self.pages.len()
    }

    /// Conta quante pagine sono selezionate
    pub fn count(&self) -> usize {
        self.selected_indices.len()
    }

    /// Etichette delle pagine, nell'ordine della lista
    pub fn pages(&self) -> &[String] {
        &self.pages
    }

    /// Restituisce le etichette selezionate nell'ordine originale della lista
    pub fn selected_labels(&self) -> Vec<String> {
        self.pages
            .iter()
            .enumerate()
            .filter(|(idx, _)| self.selected_indices.contains(idx))
            .map(|(_, label)| label.clone())
            .collect()
    }
}

/// Struttura contenitore condivisa per l'accesso alla selezione dalle closure
pub type SharedSelection = Arc<Mutex<PageSelection>>;

/// Crea una nuova selezione condivisa
pub fn new_shared_selection(pages: Vec<String>) -> SharedSelection {
    Arc::new(Mutex::new(PageSelection::new(pages)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn six_pages() -> Vec<String> {
        (1..=6).map(|i| format!("Page {}", i)).collect()
    }

    #[test]
    fn starts_empty() {
        let sel = PageSelection::new(six_pages());
        assert_eq!(sel.count(), 0);
        assert!(!sel.all_selected());
    }

    #[test]
    fn toggle_adds_and_removes_membership() {
        let mut sel = PageSelection::new(six_pages());
        sel.toggle(1);
        assert!(sel.is_selected(1));
        assert_eq!(sel.selected_labels(), vec!["Page 2".to_string()]);
        sel.toggle(1);
        assert!(!sel.is_selected(1));
        assert_eq!(sel.count(), 0);
    }

    #[test]
    fn toggle_is_self_inverse() {
        let mut sel = PageSelection::new(six_pages());
        sel.toggle(0);
        sel.toggle(4);
        let before = sel.selected_labels();
        sel.toggle(2);
        sel.toggle(2);
        assert_eq!(sel.selected_labels(), before);
    }

    #[test]
    fn toggle_ignores_out_of_range_index() {
        let mut sel = PageSelection::new(six_pages());
        sel.toggle(6);
        sel.toggle(100);
        sel.toggle(usize::MAX);
        assert_eq!(sel.count(), 0);
        assert!(!sel.all_selected());
    }

    // Derivazione letterale: su una lista vuota la selezione vuota copre
    // tutta la lista
    #[test]
    fn all_selected_on_empty_list_is_true() {
        let sel = PageSelection::new(Vec::new());
        assert!(sel.all_selected());
        assert!(sel.selected_labels().is_empty());
    }

    #[test]
    fn all_selected_follows_every_mutation() {
        let mut sel = PageSelection::new(six_pages());
        for idx in 0..6 {
            assert!(!sel.all_selected());
            sel.toggle(idx);
        }
        assert!(sel.all_selected());
        sel.toggle(3);
        assert!(!sel.all_selected());
    }

    #[test]
    fn toggle_all_fills_in_one_step() {
        let mut sel = PageSelection::new(six_pages());
        sel.toggle(2);
        sel.toggle_all();
        assert!(sel.all_selected());
        assert_eq!(sel.count(), 6);
    }

    #[test]
    fn toggle_all_clears_in_one_step() {
        let mut sel = PageSelection::new(six_pages());
        sel.toggle_all();
        assert!(sel.all_selected());
        sel.toggle_all();
        assert_eq!(sel.count(), 0);
        assert!(!sel.all_selected());
    }

    #[test]
    fn selected_labels_keep_list_order() {
        let mut sel = PageSelection::new(six_pages());
        sel.toggle(5);
        sel.toggle(0);
        sel.toggle(3);
        assert_eq!(
            sel.selected_labels(),
            vec![
                "Page 1".to_string(),
                "Page 4".to_string(),
                "Page 6".to_string()
            ]
        );
    }

    // Scenario completo: la sequenza di riferimento sulle sei pagine
    #[test]
    fn six_page_scenario() {
        let mut sel = PageSelection::new(six_pages());
        assert!(!sel.all_selected());

        sel.toggle(1);
        assert_eq!(sel.selected_labels(), vec!["Page 2".to_string()]);
        assert!(!sel.all_selected());

        sel.toggle(1);
        assert_eq!(sel.count(), 0);
        assert!(!sel.all_selected());

        for idx in 0..6 {
            sel.toggle(idx);
        }
        assert_eq!(sel.selected_labels(), six_pages());
        assert!(sel.all_selected());

        sel.toggle_all();
        assert_eq!(sel.count(), 0);
        assert!(!sel.all_selected());

        sel.toggle_all();
        assert_eq!(sel.selected_labels(), six_pages());
        assert!(sel.all_selected());
    }
}
