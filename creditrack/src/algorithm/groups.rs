//! groups.rs - Resolución de grupos de paquetes relacionados
//!
//! Los paquetes forman un grafo no dirigido: una referencia A -> B en
//! `related_bundles` une ambos sin importar en qué paquete se declaró. Cada
//! componente conexo es un `RelatedBundleGroup`.
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};
use petgraph::graph::{NodeIndex, UnGraph};
use tracing::debug;
use crate::models::{CourseBundle, RelatedBundleGroup};

/// Separador usado para construir el identificador de grupo.
pub const GROUP_ID_SEPARATOR: &str = "/";

/// Construye el grafo de paquetes. Los nodos llevan el nombre del paquete.
/// Las referencias a paquetes inexistentes se descartan.
pub fn build_bundle_graph(bundles: &BTreeMap<String, CourseBundle>) -> UnGraph<String, ()> {
    let mut graph: UnGraph<String, ()> = UnGraph::new_undirected();
    let mut node_map: HashMap<&str, NodeIndex> = HashMap::new();

    for name in bundles.keys() {
        let idx = graph.add_node(name.clone());
        node_map.insert(name.as_str(), idx);
    }

    for (name, bundle) in bundles.iter() {
        let from = node_map[name.as_str()];
        for related in bundle.related_bundles.iter() {
            match node_map.get(related.as_str()) {
                Some(&to) => {
                    // auto-referencias y aristas repetidas no aportan nada
                    if from != to && graph.find_edge(from, to).is_none() {
                        graph.add_edge(from, to, ());
                    }
                }
                None => debug!(
                    bundle = %name,
                    related = %related,
                    "related bundle desconocido, se ignora"
                ),
            }
        }
    }

    graph
}

/// Componentes conexos del grafo con recorrido en profundidad iterativo
/// (pila explícita) y un conjunto de visitados por nombre de paquete.
pub fn connected_components(graph: &UnGraph<String, ()>) -> Vec<BTreeSet<String>> {
    let mut visited: HashSet<&str> = HashSet::new();
    let mut components: Vec<BTreeSet<String>> = Vec::new();

    for start in graph.node_indices() {
        if !visited.insert(graph[start].as_str()) {
            continue;
        }

        let mut component: BTreeSet<String> = BTreeSet::new();
        let mut stack: Vec<NodeIndex> = vec![start];
        while let Some(idx) = stack.pop() {
            component.insert(graph[idx].clone());
            for neighbor in graph.neighbors(idx) {
                if visited.insert(graph[neighbor].as_str()) {
                    stack.push(neighbor);
                }
            }
        }
        components.push(component);
    }

    components
}

/// Intersección de los códigos de curso de todos los paquetes dados.
/// Sin paquetes => conjunto vacío.
pub fn common_courses<'a, I>(bundles: I) -> BTreeSet<String>
where
    I: IntoIterator<Item = &'a CourseBundle>,
{
    let mut iter = bundles.into_iter();
    let mut common: BTreeSet<String> = match iter.next() {
        Some(first) => first.courses.keys().cloned().collect(),
        None => return BTreeSet::new(),
    };
    for bundle in iter {
        common.retain(|code| bundle.courses.contains_key(code));
    }
    common
}

/// Identificador de grupo: nombres ordenados unidos con `/`.
pub fn group_id<'a, I>(names: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    let mut sorted: Vec<&str> = names.into_iter().collect();
    sorted.sort_unstable();
    sorted.join(GROUP_ID_SEPARATOR)
}

/// Arma el grupo para un componente.
pub fn build_group(
    bundles: &BTreeMap<String, CourseBundle>,
    members: &BTreeSet<String>,
) -> RelatedBundleGroup {
    let member_bundles: BTreeMap<String, CourseBundle> = members
        .iter()
        .filter_map(|name| bundles.get(name).map(|b| (name.clone(), b.clone())))
        .collect();

    RelatedBundleGroup {
        id: group_id(member_bundles.keys().map(String::as_str)),
        common_courses: common_courses(member_bundles.values()),
        bundles: member_bundles,
    }
}

/// Resuelve todos los grupos. Los grupos particionan el conjunto de paquetes
/// y el resultado no depende del orden de entrada.
pub fn resolve_groups(
    bundles: &BTreeMap<String, CourseBundle>,
) -> BTreeMap<String, RelatedBundleGroup> {
    let graph = build_bundle_graph(bundles);
    let mut groups: BTreeMap<String, RelatedBundleGroup> = BTreeMap::new();

    for component in connected_components(&graph) {
        let group = build_group(bundles, &component);
        debug!(
            group = %group.id,
            members = group.bundles.len(),
            common = group.common_courses.len(),
            "grupo resuelto"
        );
        groups.insert(group.id.clone(), group);
    }

    groups
}
